use serde::Serialize;

use crate::modules::cast_member::domain::CastMemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCastMemberResult {
    pub id: CastMemberId,
}
