/// Query for a single video by its textual id
#[derive(Debug, Clone)]
pub struct GetVideoByIdQuery {
    pub id: String,
}

impl GetVideoByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
