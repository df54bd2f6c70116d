/// Command for creating a genre linked to existing categories
#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
    pub name: String,
    pub description: Option<String>,
    /// Raw category ids; parsed and checked by the handler
    pub categories_id: Vec<String>,
    pub is_active: bool,
}

impl CreateGenreCommand {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        categories_id: Vec<String>,
        is_active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            categories_id,
            is_active,
        }
    }
}
