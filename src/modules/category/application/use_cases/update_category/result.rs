use serde::Serialize;

use crate::modules::category::domain::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryResult {
    pub id: CategoryId,
}

impl UpdateCategoryResult {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}
