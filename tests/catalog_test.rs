use std::sync::Arc;

use async_trait::async_trait;
use manuscript_explorer::db;
use manuscript_explorer::domain::{DomainError, GenerativeModel, ManuscriptFields};
use manuscript_explorer::infrastructure::AppState;
use manuscript_explorer::infrastructure::file_store::{FileKind, FileStore, Upload};
use tempfile::TempDir;

struct SilentModel;

#[async_trait]
impl GenerativeModel for SilentModel {
    async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::External("not used in catalog tests".to_string()))
    }
}

// Helper to create a test app state backed by in-memory SQLite and a temp upload area
async fn setup_test_state() -> (AppState, TempDir) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let files = FileStore::new(dir.path().join("uploads"), dir.path().join("pdfs"));
    files.ensure_dirs().await.expect("Failed to create upload dirs");

    (AppState::new(db, files, Arc::new(SilentModel)), dir)
}

fn fields(title: &str, era: &str, genre: &str) -> ManuscriptFields {
    ManuscriptFields {
        title: title.to_string(),
        era: era.to_string(),
        genre: genre.to_string(),
        description: "...".to_string(),
    }
}

fn upload(name: &str, bytes: &[u8]) -> Option<Upload> {
    Some(Upload::new(name, bytes.to_vec()))
}

#[tokio::test]
async fn test_create_list_delete_round() {
    let (state, _dir) = setup_test_state().await;

    let created = state
        .catalog
        .create(
            fields("Rigveda Folio", "Vedic", "Scripture"),
            upload("cover1.jpg", b"cover-bytes"),
            upload("rv.pdf", b"%PDF-1.4"),
        )
        .await
        .expect("create failed");

    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Rigveda Folio");
    assert_eq!(created.cover_image, "cover1.jpg");
    assert_eq!(created.pdf_file, "rv.pdf");

    let listed = state.catalog.list().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    state.catalog.delete(1).await.expect("delete failed");
    assert!(state.catalog.list().await.unwrap().is_empty());
    assert!(matches!(
        state.reader.get_by_id(1).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_create_stores_files_under_sanitized_names() {
    let (state, _dir) = setup_test_state().await;
    let files = state.catalog.files().clone();

    let created = state
        .catalog
        .create(
            fields("Charaka Samhita", "Classical", "Ayurveda"),
            upload("../my cover.jpg", b"jpeg-data"),
            upload("Charaka Samhita vol 1.pdf", b"pdf-data"),
        )
        .await
        .unwrap();

    assert_eq!(created.cover_image, "my_cover.jpg");
    assert_eq!(created.pdf_file, "Charaka_Samhita_vol_1.pdf");

    let cover = std::fs::read(files.path_of(FileKind::Cover, "my_cover.jpg")).unwrap();
    let pdf = std::fs::read(files.path_of(FileKind::Pdf, "Charaka_Samhita_vol_1.pdf")).unwrap();
    assert_eq!(cover, b"jpeg-data");
    assert_eq!(pdf, b"pdf-data");
}

#[tokio::test]
async fn test_create_without_both_files_adds_nothing() {
    let (state, _dir) = setup_test_state().await;

    let no_pdf = state
        .catalog
        .create(fields("A", "B", "C"), upload("c.jpg", b"x"), None)
        .await;
    assert!(matches!(no_pdf, Err(DomainError::Validation(_))));

    let blank_cover = state
        .catalog
        .create(fields("A", "B", "C"), upload("", b""), upload("p.pdf", b"x"))
        .await;
    assert!(matches!(blank_cover, Err(DomainError::Validation(_))));

    assert!(state.catalog.list().await.unwrap().is_empty());
    // Nothing written for the file that was present either
    assert!(!state.catalog.files().path_of(FileKind::Cover, "c.jpg").exists());
    assert!(!state.catalog.files().path_of(FileKind::Pdf, "p.pdf").exists());
}

#[tokio::test]
async fn test_edit_without_files_keeps_references() {
    let (state, _dir) = setup_test_state().await;
    let created = state
        .catalog
        .create(
            fields("Old", "Old era", "Old genre"),
            upload("c.jpg", b"c"),
            upload("p.pdf", b"p"),
        )
        .await
        .unwrap();

    let updated = state
        .catalog
        .update(
            created.id,
            fields("New", "New era", "New genre"),
            upload("", b""),
            None,
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.era, "New era");
    assert_eq!(updated.genre, "New genre");
    assert_eq!(updated.cover_image, "c.jpg");
    assert_eq!(updated.pdf_file, "p.pdf");
}

#[tokio::test]
async fn test_edit_with_new_cover_replaces_only_cover() {
    let (state, _dir) = setup_test_state().await;
    let created = state
        .catalog
        .create(fields("T", "E", "G"), upload("c.jpg", b"c"), upload("p.pdf", b"p"))
        .await
        .unwrap();

    let updated = state
        .catalog
        .update(created.id, fields("T", "E", "G"), upload("new cover.png", b"png"), None)
        .await
        .unwrap();

    assert_eq!(updated.cover_image, "new_cover.png");
    assert_eq!(updated.pdf_file, "p.pdf");
    assert!(
        state
            .catalog
            .files()
            .path_of(FileKind::Cover, "new_cover.png")
            .exists()
    );

    let fetched = state.reader.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_edit_unknown_id_writes_nothing() {
    let (state, _dir) = setup_test_state().await;

    let result = state
        .catalog
        .update(99, fields("T", "E", "G"), upload("ghost.jpg", b"x"), None)
        .await;

    assert!(matches!(result, Err(DomainError::NotFound)));
    assert!(!state.catalog.files().path_of(FileKind::Cover, "ghost.jpg").exists());
}

#[tokio::test]
async fn test_delete_leaves_files_on_disk() {
    let (state, _dir) = setup_test_state().await;
    let created = state
        .catalog
        .create(fields("T", "E", "G"), upload("keep.jpg", b"c"), upload("keep.pdf", b"p"))
        .await
        .unwrap();

    state.catalog.delete(created.id).await.unwrap();

    let files = state.catalog.files();
    assert!(files.path_of(FileKind::Cover, "keep.jpg").exists());
    assert!(files.path_of(FileKind::Pdf, "keep.pdf").exists());
    assert!(matches!(
        state.catalog.delete(created.id).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_same_filename_overwrites_previous_upload() {
    let (state, _dir) = setup_test_state().await;

    let first = state
        .catalog
        .create(fields("First", "E", "G"), upload("shared.jpg", b"one"), upload("a.pdf", b"a"))
        .await
        .unwrap();
    let second = state
        .catalog
        .create(fields("Second", "E", "G"), upload("shared.jpg", b"two"), upload("b.pdf", b"b"))
        .await
        .unwrap();

    assert_eq!(first.cover_image, second.cover_image);
    let stored = std::fs::read(state.catalog.files().path_of(FileKind::Cover, "shared.jpg")).unwrap();
    assert_eq!(stored, b"two");
}
