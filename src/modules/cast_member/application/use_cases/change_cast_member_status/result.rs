use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::cast_member::domain::CastMemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCastMemberStatusResult {
    pub id: CastMemberId,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
