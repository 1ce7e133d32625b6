//! SeaORM implementation of ManuscriptRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::domain::{DomainError, ManuscriptChanges, ManuscriptRepository, NewManuscript};
use crate::models::Manuscript;
use crate::models::manuscript::{ActiveModel, Column, Entity as ManuscriptEntity};

/// SeaORM-based implementation of ManuscriptRepository
pub struct SeaOrmManuscriptRepository {
    db: DatabaseConnection,
}

impl SeaOrmManuscriptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ManuscriptRepository for SeaOrmManuscriptRepository {
    async fn find_all(&self) -> Result<Vec<Manuscript>, DomainError> {
        let manuscripts = ManuscriptEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(manuscripts.into_iter().map(Manuscript::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Manuscript>, DomainError> {
        let manuscript = ManuscriptEntity::find_by_id(id).one(&self.db).await?;
        Ok(manuscript.map(Manuscript::from))
    }

    async fn create(&self, input: NewManuscript) -> Result<Manuscript, DomainError> {
        let fields = input.fields;

        let manuscript = ActiveModel {
            title: Set(Some(fields.title)),
            era: Set(Some(fields.era)),
            genre: Set(Some(fields.genre)),
            description: Set(Some(fields.description)),
            cover_image: Set(Some(input.cover_image)),
            pdf_file: Set(Some(input.pdf_file)),
            ..Default::default()
        };

        let result = manuscript.insert(&self.db).await?;
        Ok(Manuscript::from(result))
    }

    async fn update(&self, id: i32, changes: ManuscriptChanges) -> Result<Manuscript, DomainError> {
        let txn = self.db.begin().await?;

        let existing = ManuscriptEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let fields = changes.fields;
        let mut active: ActiveModel = existing.into();
        active.title = Set(Some(fields.title));
        active.era = Set(Some(fields.era));
        active.genre = Set(Some(fields.genre));
        active.description = Set(Some(fields.description));
        if let Some(cover_image) = changes.cover_image {
            active.cover_image = Set(Some(cover_image));
        }
        if let Some(pdf_file) = changes.pdf_file {
            active.pdf_file = Set(Some(pdf_file));
        }

        let result = active.update(&txn).await?;
        txn.commit().await?;

        Ok(Manuscript::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = ManuscriptEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ManuscriptFields;
    use crate::infrastructure::db;
    use sea_orm::{ConnectionTrait, Statement};

    async fn setup_repo() -> SeaOrmManuscriptRepository {
        let db = db::init_db("sqlite::memory:")
            .await
            .expect("Failed to init DB");
        SeaOrmManuscriptRepository::new(db)
    }

    fn fields(title: &str) -> ManuscriptFields {
        ManuscriptFields {
            title: title.to_string(),
            era: "Gupta".to_string(),
            genre: "Poetry".to_string(),
            description: "Palm-leaf folio".to_string(),
        }
    }

    #[tokio::test]
    async fn update_keeps_files_that_are_not_replaced() {
        let repo = setup_repo().await;
        let created = repo
            .create(NewManuscript {
                fields: fields("Meghaduta"),
                cover_image: "cover.jpg".to_string(),
                pdf_file: "meghaduta.pdf".to_string(),
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                ManuscriptChanges {
                    fields: fields("Meghaduta (revised)"),
                    cover_image: None,
                    pdf_file: Some("meghaduta_v2.pdf".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Meghaduta (revised)");
        assert_eq!(updated.cover_image, "cover.jpg");
        assert_eq!(updated.pdf_file, "meghaduta_v2.pdf");
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id_are_not_found() {
        let repo = setup_repo().await;

        let update = repo
            .update(
                42,
                ManuscriptChanges {
                    fields: fields("Ghost"),
                    cover_image: None,
                    pdf_file: None,
                },
            )
            .await;
        assert!(matches!(update, Err(DomainError::NotFound)));
        assert!(matches!(repo.delete(42).await, Err(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn null_columns_read_as_empty_text() {
        let repo = setup_repo().await;
        repo.db
            .execute(Statement::from_string(
                repo.db.get_database_backend(),
                "INSERT INTO manuscripts (id, title) VALUES (7, 'Untitled folio')".to_owned(),
            ))
            .await
            .unwrap();

        let manuscript = repo.find_by_id(7).await.unwrap().unwrap();
        assert_eq!(manuscript.title, "Untitled folio");
        assert_eq!(manuscript.era, "");
        assert_eq!(manuscript.cover_image, "");
        assert_eq!(manuscript.pdf_file, "");
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let repo = setup_repo().await;
        for title in ["B", "A", "C"] {
            repo.create(NewManuscript {
                fields: fields(title),
                cover_image: format!("{title}.jpg"),
                pdf_file: format!("{title}.pdf"),
            })
            .await
            .unwrap();
        }

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }
}
