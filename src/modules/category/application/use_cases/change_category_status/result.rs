use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::category::domain::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCategoryStatusResult {
    pub id: CategoryId,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
