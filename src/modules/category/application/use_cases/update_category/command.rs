/// Command replacing every mutable field of a category
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            is_active,
        }
    }
}
