/// Query for a single category by its textual id
#[derive(Debug, Clone)]
pub struct GetCategoryByIdQuery {
    pub id: String,
}

impl GetCategoryByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
