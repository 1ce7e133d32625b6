use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "manuscripts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub era: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub pdf_file: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Manuscript {
    pub id: i32,
    pub title: String,
    pub era: String,
    pub genre: String,
    pub description: String,
    /// Stored filename in the covers directory
    pub cover_image: String,
    /// Stored filename in the PDF directory
    pub pdf_file: String,
}

impl From<Model> for Manuscript {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title.unwrap_or_default(),
            era: model.era.unwrap_or_default(),
            genre: model.genre.unwrap_or_default(),
            description: model.description.unwrap_or_default(),
            cover_image: model.cover_image.unwrap_or_default(),
            pdf_file: model.pdf_file.unwrap_or_default(),
        }
    }
}
