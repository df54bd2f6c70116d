/// Removes a video for good. Deleting an unknown id is a no-op.
#[derive(Debug, Clone)]
pub struct DeleteVideoCommand {
    pub id: String,
}

impl DeleteVideoCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
