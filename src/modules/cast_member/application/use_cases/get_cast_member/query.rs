/// Query for a single cast member by its textual id
#[derive(Debug, Clone)]
pub struct GetCastMemberByIdQuery {
    pub id: String,
}

impl GetCastMemberByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
