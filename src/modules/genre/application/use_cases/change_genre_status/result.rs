use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::genre::domain::GenreId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeGenreStatusResult {
    pub id: GenreId,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
