use chrono::{DateTime, Utc};

use crate::shared::domain::{AggregateRoot, Identifier, Lifecycle, Searchable};
use crate::shared::validation::{
    Described, DescriptionRule, NameRule, Notification, Validate, ValidationChain,
};

crate::entity_id!(
    /// Identity of a [`Category`]
    CategoryId
);

/// A thematic grouping of videos ("Movies", "Documentaries", ...).
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    lifecycle: Lifecycle,
}

impl Category {
    /// Builds a brand-new category. Never fails; call [`Validate::validation`] afterwards.
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: CategoryId::unique(),
            name: name.into(),
            description,
            lifecycle: Lifecycle::new(is_active),
        }
    }

    /// Rehydrates a category from stored state
    pub fn with(
        id: CategoryId,
        name: String,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            lifecycle: Lifecycle::restore(created_at, updated_at, deleted_at, is_active),
        }
    }

    /// Replaces every mutable field at once
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        self.name = name.into();
        self.description = description;
        self.lifecycle.set_active(is_active);
        self
    }

    pub fn rename(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self.lifecycle.touch();
        self
    }

    pub fn update_description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
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

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.deleted_at()
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Described for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

pub const CATEGORY_NAME_MIN_LENGTH: usize = 3;

impl Validate for Category {
    fn validate(&self, notification: &mut Notification) {
        ValidationChain::new()
            .add_rule(NameRule::new("name").min(CATEGORY_NAME_MIN_LENGTH))
            .add_rule(DescriptionRule)
            .validate(self, notification);
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;
    const NAME: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl Searchable for Category {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.name.as_str()];
        text.extend(self.description.as_deref());
        text
    }
}
