/// Command for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description,
            is_active,
        }
    }
}
