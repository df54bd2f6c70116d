#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub categories_id: Vec<String>,
    pub is_active: bool,
}

impl UpdateGenreCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        categories_id: Vec<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            categories_id,
            is_active,
        }
    }
}
