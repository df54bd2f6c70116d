/// Removes a genre for good. Deleting an unknown id is a no-op.
#[derive(Debug, Clone)]
pub struct DeleteGenreCommand {
    pub id: String,
}

impl DeleteGenreCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
