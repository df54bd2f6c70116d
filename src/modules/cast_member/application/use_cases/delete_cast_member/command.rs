/// Removes a cast member for good. Deleting an unknown id is a no-op.
#[derive(Debug, Clone)]
pub struct DeleteCastMemberCommand {
    pub id: String,
}

impl DeleteCastMemberCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
