use crate::modules::cast_member::domain::CastMemberType;

/// Command for registering a new cast member
#[derive(Debug, Clone)]
pub struct CreateCastMemberCommand {
    pub name: String,
    pub description: Option<String>,
    pub kind: CastMemberType,
    pub is_active: bool,
}

impl CreateCastMemberCommand {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        kind: CastMemberType,
        is_active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            kind,
            is_active,
        }
    }
}
