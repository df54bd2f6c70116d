/// Activates or deactivates (soft-deletes) a category
#[derive(Debug, Clone)]
pub struct ChangeCategoryStatusCommand {
    pub id: String,
    pub active: bool,
}

impl ChangeCategoryStatusCommand {
    pub fn new(id: impl Into<String>, active: bool) -> Self {
        Self {
            id: id.into(),
            active,
        }
    }

    pub fn activate(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    pub fn deactivate(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }
}
