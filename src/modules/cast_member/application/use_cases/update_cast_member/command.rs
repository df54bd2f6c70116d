use crate::modules::cast_member::domain::CastMemberType;

#[derive(Debug, Clone)]
pub struct UpdateCastMemberCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: CastMemberType,
    pub is_active: bool,
}

impl UpdateCastMemberCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        kind: CastMemberType,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            kind,
            is_active,
        }
    }
}
