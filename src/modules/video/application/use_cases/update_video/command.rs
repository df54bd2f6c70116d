use crate::modules::video::domain::{Rating, VideoDetails};

/// Replaces the details and references of an existing video; media are left untouched
#[derive(Debug, Clone)]
pub struct UpdateVideoCommand {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub year_launched: i32,
    pub duration: u32,
    pub opened: bool,
    pub published: bool,
    pub rating: Rating,
    pub categories_id: Vec<String>,
    pub genres_id: Vec<String>,
    pub cast_members_id: Vec<String>,
    pub is_active: bool,
}

impl UpdateVideoCommand {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year_launched: i32,
        duration: u32,
        rating: Rating,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            year_launched,
            duration,
            opened: false,
            published: false,
            rating,
            categories_id: Vec::new(),
            genres_id: Vec::new(),
            cast_members_id: Vec::new(),
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_references(
        mut self,
        categories_id: Vec<String>,
        genres_id: Vec<String>,
        cast_members_id: Vec<String>,
    ) -> Self {
        self.categories_id = categories_id;
        self.genres_id = genres_id;
        self.cast_members_id = cast_members_id;
        self
    }

    pub fn with_flags(mut self, opened: bool, published: bool, is_active: bool) -> Self {
        self.opened = opened;
        self.published = published;
        self.is_active = is_active;
        self
    }

    pub fn details(&self) -> VideoDetails {
        VideoDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            year_launched: self.year_launched,
            duration: self.duration,
            opened: self.opened,
            published: self.published,
            rating: self.rating,
        }
    }
}
