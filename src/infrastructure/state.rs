//! Application state containing services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::assistant::{AssistantService, GeminiClient};
use crate::domain::{DomainError, GenerativeModel, ManuscriptRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::file_store::FileStore;
use crate::infrastructure::SeaOrmManuscriptRepository;
use crate::services::{CatalogService, ReaderService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Manuscript create/update/delete and listing
    pub catalog: CatalogService,
    /// Single manuscript lookup
    pub reader: ReaderService,
    /// Chat relay to the hosted model
    pub assistant: AssistantService,
}

impl AppState {
    /// Create a new AppState around an already-built model client
    pub fn new(
        db: DatabaseConnection,
        files: FileStore,
        model: Arc<dyn GenerativeModel>,
    ) -> Self {
        let repo: Arc<dyn ManuscriptRepository> =
            Arc::new(SeaOrmManuscriptRepository::new(db.clone()));

        Self {
            db,
            catalog: CatalogService::new(repo.clone(), files),
            reader: ReaderService::new(repo),
            assistant: AssistantService::new(model),
        }
    }

    /// Build the production state: Gemini client and upload folders from config
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Result<Self, DomainError> {
        if config.gemini.api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set, the assistant will answer with its fallback");
        }
        let model = Arc::new(GeminiClient::new(config.gemini.clone())?);
        let files = FileStore::new(config.upload_folder.clone(), config.pdf_folder.clone());

        Ok(Self::new(db, files, model))
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
