//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Manuscript;

/// Text fields of a manuscript, as submitted by the admin panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManuscriptFields {
    pub title: String,
    pub era: String,
    pub genre: String,
    pub description: String,
}

/// Input for inserting a manuscript whose files are already stored
#[derive(Debug, Clone)]
pub struct NewManuscript {
    pub fields: ManuscriptFields,
    pub cover_image: String,
    pub pdf_file: String,
}

/// Changes applied to an existing manuscript.
///
/// Text fields always overwrite. `None` file references keep the stored name.
#[derive(Debug, Clone)]
pub struct ManuscriptChanges {
    pub fields: ManuscriptFields,
    pub cover_image: Option<String>,
    pub pdf_file: Option<String>,
}

/// Repository trait for Manuscript entity
#[async_trait]
pub trait ManuscriptRepository: Send + Sync {
    /// Find all manuscripts in insertion order
    async fn find_all(&self) -> Result<Vec<Manuscript>, DomainError>;

    /// Find a single manuscript by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Manuscript>, DomainError>;

    /// Insert a new manuscript
    async fn create(&self, input: NewManuscript) -> Result<Manuscript, DomainError>;

    /// Read-modify-write of an existing manuscript in a single transaction
    async fn update(&self, id: i32, changes: ManuscriptChanges) -> Result<Manuscript, DomainError>;

    /// Delete a manuscript by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// A hosted text-generation model
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Submit a prompt and return the model's text answer
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
