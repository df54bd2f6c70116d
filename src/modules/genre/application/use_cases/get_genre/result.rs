use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::domain::AggregateRoot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub description: Option<String>,
    pub categories_id: Vec<CategoryId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id(),
            name: genre.name().to_string(),
            description: genre.description().map(str::to_string),
            categories_id: genre.categories().to_vec(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}
