use chrono::{DateTime, Utc};

use crate::modules::category::domain::CategoryId;
use crate::shared::domain::{AggregateRoot, Identifier, Lifecycle, Searchable};
use crate::shared::validation::{
    Described, DescriptionRule, NameRule, Notification, Validate, ValidationChain,
};

crate::entity_id!(
    /// Identity of a [`Genre`]
    GenreId
);

/// A genre ("Drama", "Horror") and the categories it belongs to.
///
/// Categories are referenced by id only; whether they exist is checked by the
/// use cases that change them.
#[derive(Debug, Clone)]
pub struct Genre {
    id: GenreId,
    name: String,
    description: Option<String>,
    categories: Vec<CategoryId>,
    lifecycle: Lifecycle,
}

impl Genre {
    pub fn new_genre(
        name: impl Into<String>,
        description: Option<String>,
        categories: Vec<CategoryId>,
        is_active: bool,
    ) -> Self {
        Self {
            id: GenreId::unique(),
            name: name.into(),
            description,
            categories: dedup(categories),
            lifecycle: Lifecycle::new(is_active),
        }
    }

    /// Rehydrates a genre from stored state
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: GenreId,
        name: String,
        description: Option<String>,
        categories: Vec<CategoryId>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            categories: dedup(categories),
            lifecycle: Lifecycle::restore(created_at, updated_at, deleted_at, is_active),
        }
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
        categories: Vec<CategoryId>,
    ) -> &mut Self {
        self.name = name.into();
        self.description = description;
        self.categories = dedup(categories);
        self.lifecycle.set_active(is_active);
        self
    }

    /// Adds a category reference; adding a present one changes nothing
    pub fn add_category(&mut self, category: CategoryId) -> &mut Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
            self.lifecycle.touch();
        }
        self
    }

    pub fn remove_category(&mut self, category: &CategoryId) -> &mut Self {
        let before = self.categories.len();
        self.categories.retain(|id| id != category);
        if self.categories.len() != before {
            self.lifecycle.touch();
        }
        self
    }

    pub fn replace_categories(&mut self, categories: Vec<CategoryId>) -> &mut Self {
        self.categories = dedup(categories);
        self.lifecycle.touch();
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.lifecycle.activate();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        self.lifecycle.deactivate();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.deleted_at()
    }
}

fn dedup(ids: Vec<CategoryId>) -> Vec<CategoryId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

impl Described for Genre {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Validate for Genre {
    fn validate(&self, notification: &mut Notification) {
        ValidationChain::new()
            .add_rule(NameRule::new("name"))
            .add_rule(DescriptionRule)
            .validate(self, notification);
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;
    const NAME: &'static str = "Genre";

    fn id(&self) -> GenreId {
        self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl Searchable for Genre {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.name.as_str()];
        text.extend(self.description.as_deref());
        text
    }
}
