/// Test data factories using builder pattern
///
/// Each factory starts from a valid command and lets a test override what it cares about.
use catalog_lib::modules::cast_member::application::use_cases::CreateCastMemberCommand;
use catalog_lib::modules::cast_member::CastMemberType;
use catalog_lib::modules::category::application::use_cases::CreateCategoryCommand;
use catalog_lib::modules::genre::application::use_cases::CreateGenreCommand;
use catalog_lib::modules::video::application::use_cases::CreateVideoCommand;
use catalog_lib::modules::video::domain::Rating;

pub struct CategoryFactory {
    name: String,
    description: Option<String>,
    is_active: bool,
}

impl Default for CategoryFactory {
    fn default() -> Self {
        Self {
            name: "Documentaries".to_string(),
            description: Some("Non-fiction films".to_string()),
            is_active: true,
        }
    }
}

impl CategoryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> CreateCategoryCommand {
        CreateCategoryCommand::new(self.name, self.description, self.is_active)
    }
}

pub struct GenreFactory {
    name: String,
    categories_id: Vec<String>,
    is_active: bool,
}

impl Default for GenreFactory {
    fn default() -> Self {
        Self {
            name: "Drama".to_string(),
            categories_id: Vec::new(),
            is_active: true,
        }
    }
}

impl GenreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn categories(mut self, ids: &[&str]) -> Self {
        self.categories_id = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn build(self) -> CreateGenreCommand {
        CreateGenreCommand::new(self.name, None, self.categories_id, self.is_active)
    }
}

pub fn actor(name: &str) -> CreateCastMemberCommand {
    CreateCastMemberCommand::new(name, None, CastMemberType::Actor, true)
}

pub fn director(name: &str) -> CreateCastMemberCommand {
    CreateCastMemberCommand::new(name, None, CastMemberType::Director, true)
}

pub fn video(title: &str) -> CreateVideoCommand {
    CreateVideoCommand::new(title, 2014, 169, Rating::Age10)
        .with_description("Explorers travel through a wormhole")
        .with_flags(false, true, true)
}
