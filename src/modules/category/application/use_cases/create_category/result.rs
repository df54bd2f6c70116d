use serde::Serialize;

use crate::modules::category::domain::CategoryId;

/// Result of creating a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryResult {
    pub id: CategoryId,
}

impl CreateCategoryResult {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}
