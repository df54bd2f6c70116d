use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::video::domain::VideoId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeVideoStatusResult {
    pub id: VideoId,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
