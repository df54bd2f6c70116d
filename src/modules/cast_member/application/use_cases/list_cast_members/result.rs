use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::cast_member::domain::{CastMember, CastMemberId, CastMemberType};
use crate::shared::domain::AggregateRoot;

/// Row of a cast member listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMemberListOutput {
    pub id: CastMemberId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CastMember> for CastMemberListOutput {
    fn from(cast_member: CastMember) -> Self {
        Self {
            id: cast_member.id(),
            name: cast_member.name().to_string(),
            description: cast_member.description().map(str::to_string),
            kind: cast_member.kind(),
            is_active: cast_member.is_active(),
            created_at: cast_member.created_at(),
            deleted_at: cast_member.deleted_at(),
        }
    }
}
