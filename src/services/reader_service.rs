//! Reader Service - single manuscript lookup for display

use std::sync::Arc;

use crate::domain::{DomainError, ManuscriptRepository};
use crate::models::Manuscript;

#[derive(Clone)]
pub struct ReaderService {
    repo: Arc<dyn ManuscriptRepository>,
}

impl ReaderService {
    pub fn new(repo: Arc<dyn ManuscriptRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Manuscript, DomainError> {
        self.repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
    }
}
