use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::domain::AggregateRoot;

/// Row of a genre listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreListOutput {
    pub id: GenreId,
    pub name: String,
    pub categories_id: Vec<CategoryId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id(),
            name: genre.name().to_string(),
            categories_id: genre.categories().to_vec(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}
