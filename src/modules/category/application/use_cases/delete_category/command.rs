/// Removes a category for good. Deleting an unknown id is a no-op.
#[derive(Debug, Clone)]
pub struct DeleteCategoryCommand {
    pub id: String,
}

impl DeleteCategoryCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
