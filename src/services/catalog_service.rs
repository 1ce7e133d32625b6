//! Catalog Service - manuscript record lifecycle
//!
//! Combines the manuscript repository with the upload file store. Handlers call
//! these operations; nothing here knows about HTTP.

use std::sync::Arc;

use crate::domain::{
    DomainError, ManuscriptChanges, ManuscriptFields, ManuscriptRepository, NewManuscript,
};
use crate::infrastructure::file_store::{self, FileKind, FileStore, Upload};
use crate::models::Manuscript;

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn ManuscriptRepository>,
    files: FileStore,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ManuscriptRepository>, files: FileStore) -> Self {
        Self { repo, files }
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }

    /// All manuscripts in insertion order
    pub async fn list(&self) -> Result<Vec<Manuscript>, DomainError> {
        self.repo.find_all().await
    }

    /// Store both files and insert a row referencing them.
    ///
    /// Both uploads must carry a filename. Nothing is written unless both
    /// sanitize to a usable name.
    pub async fn create(
        &self,
        fields: ManuscriptFields,
        cover: Option<Upload>,
        pdf: Option<Upload>,
    ) -> Result<Manuscript, DomainError> {
        let (cover, pdf) = match (present(cover), present(pdf)) {
            (Some(cover), Some(pdf)) => (cover, pdf),
            (None, _) => {
                return Err(DomainError::Validation(
                    "a cover image is required".to_string(),
                ));
            }
            (_, None) => {
                return Err(DomainError::Validation("a PDF file is required".to_string()));
            }
        };

        file_store::stored_name(FileKind::Cover, &cover)?;
        file_store::stored_name(FileKind::Pdf, &pdf)?;

        let cover_image = self.files.save(FileKind::Cover, &cover).await?;
        let pdf_file = self.files.save(FileKind::Pdf, &pdf).await?;

        let manuscript = self
            .repo
            .create(NewManuscript {
                fields,
                cover_image,
                pdf_file,
            })
            .await?;

        tracing::info!(
            "Created manuscript {} '{}'",
            manuscript.id,
            manuscript.title
        );
        Ok(manuscript)
    }

    /// Overwrite text fields; replace a file reference only when a new file
    /// is supplied.
    pub async fn update(
        &self,
        id: i32,
        fields: ManuscriptFields,
        cover: Option<Upload>,
        pdf: Option<Upload>,
    ) -> Result<Manuscript, DomainError> {
        // Avoid leaving stray uploads behind for an id that does not exist.
        // The merge itself is re-checked inside the repository transaction.
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound);
        }

        let cover = present(cover);
        let pdf = present(pdf);
        if let Some(cover) = &cover {
            file_store::stored_name(FileKind::Cover, cover)?;
        }
        if let Some(pdf) = &pdf {
            file_store::stored_name(FileKind::Pdf, pdf)?;
        }

        let cover_image = match &cover {
            Some(upload) => Some(self.files.save(FileKind::Cover, upload).await?),
            None => None,
        };
        let pdf_file = match &pdf {
            Some(upload) => Some(self.files.save(FileKind::Pdf, upload).await?),
            None => None,
        };

        let manuscript = self
            .repo
            .update(
                id,
                ManuscriptChanges {
                    fields,
                    cover_image,
                    pdf_file,
                },
            )
            .await?;

        tracing::info!("Updated manuscript {}", id);
        Ok(manuscript)
    }

    /// Remove the row. Stored files stay on disk.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        tracing::info!("Deleted manuscript {}", id);
        Ok(())
    }
}

fn present(upload: Option<Upload>) -> Option<Upload> {
    upload.filter(Upload::is_present)
}
