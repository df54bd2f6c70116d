use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::cast_member::domain::{CastMember, CastMemberId, CastMemberType};
use crate::shared::domain::AggregateRoot;

/// Full read model of a cast member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(cast_member: &CastMember) -> Self {
        Self {
            id: cast_member.id(),
            name: cast_member.name().to_string(),
            description: cast_member.description().map(str::to_string),
            kind: cast_member.kind(),
            is_active: cast_member.is_active(),
            created_at: cast_member.created_at(),
            updated_at: cast_member.updated_at(),
            deleted_at: cast_member.deleted_at(),
        }
    }
}
