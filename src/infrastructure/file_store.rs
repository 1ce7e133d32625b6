//! On-disk storage for uploaded covers and PDFs

use std::path::{Path, PathBuf};

use crate::domain::DomainError;
use crate::utils::secure_filename;

/// Which upload directory a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Cover,
    Pdf,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Cover => "cover",
            FileKind::Pdf => "pdf",
        }
    }
}

/// A file part received from the admin form
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// A file input left blank in a form is sent with an empty filename
    pub fn is_present(&self) -> bool {
        !self.filename.is_empty()
    }
}

/// Writes uploads under their sanitized name. Same-named uploads overwrite
/// each other and nothing is ever removed.
#[derive(Debug, Clone)]
pub struct FileStore {
    covers_dir: PathBuf,
    pdfs_dir: PathBuf,
}

impl FileStore {
    pub fn new(covers_dir: impl Into<PathBuf>, pdfs_dir: impl Into<PathBuf>) -> Self {
        Self {
            covers_dir: covers_dir.into(),
            pdfs_dir: pdfs_dir.into(),
        }
    }

    /// Create both upload directories if missing
    pub async fn ensure_dirs(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.covers_dir).await?;
        tokio::fs::create_dir_all(&self.pdfs_dir).await?;
        Ok(())
    }

    pub fn dir(&self, kind: FileKind) -> &Path {
        match kind {
            FileKind::Cover => &self.covers_dir,
            FileKind::Pdf => &self.pdfs_dir,
        }
    }

    pub fn path_of(&self, kind: FileKind, name: &str) -> PathBuf {
        self.dir(kind).join(name)
    }

    /// Sanitize the upload's filename and write its bytes. Returns the stored name.
    pub async fn save(&self, kind: FileKind, upload: &Upload) -> Result<String, DomainError> {
        let name = stored_name(kind, upload)?;
        let path = self.path_of(kind, &name);

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| DomainError::Storage(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            "Stored {} '{}' ({} bytes) as {:?}",
            kind.label(),
            upload.filename,
            upload.bytes.len(),
            path
        );
        Ok(name)
    }
}

/// The name an upload will be stored under, or a validation error when
/// nothing usable survives sanitization.
pub fn stored_name(kind: FileKind, upload: &Upload) -> Result<String, DomainError> {
    let name = secure_filename(&upload.filename);
    if name.is_empty() {
        return Err(DomainError::Validation(format!(
            "{} filename '{}' has no usable characters",
            kind.label(),
            upload.filename
        )));
    }
    Ok(name)
}
