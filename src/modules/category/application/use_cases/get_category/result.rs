use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::category::domain::{Category, CategoryId};
use crate::shared::domain::AggregateRoot;

/// Full read model of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}
