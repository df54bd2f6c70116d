use chrono::{DateTime, Utc};

use super::cast_member_type::CastMemberType;
use crate::shared::domain::{AggregateRoot, Identifier, Lifecycle, Searchable};
use crate::shared::validation::{
    Described, DescriptionRule, NameRule, Notification, Validate, ValidationChain,
};

crate::entity_id!(
    /// Identity of a [`CastMember`]
    CastMemberId
);

/// A person credited on videos, either as actor or director.
#[derive(Debug, Clone)]
pub struct CastMember {
    id: CastMemberId,
    name: String,
    description: Option<String>,
    kind: CastMemberType,
    lifecycle: Lifecycle,
}

impl CastMember {
    pub fn new_cast_member(
        name: impl Into<String>,
        description: Option<String>,
        kind: CastMemberType,
        is_active: bool,
    ) -> Self {
        Self {
            id: CastMemberId::unique(),
            name: name.into(),
            description,
            kind,
            lifecycle: Lifecycle::new(is_active),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: CastMemberId,
        name: String,
        description: Option<String>,
        kind: CastMemberType,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            kind,
            lifecycle: Lifecycle::restore(created_at, updated_at, deleted_at, is_active),
        }
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        kind: CastMemberType,
        is_active: bool,
    ) -> &mut Self {
        self.name = name.into();
        self.description = description;
        self.kind = kind;
        self.lifecycle.set_active(is_active);
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

    pub fn kind(&self) -> CastMemberType {
        self.kind
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.deleted_at()
    }
}

impl PartialEq for CastMember {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CastMember {}

impl Described for CastMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Validate for CastMember {
    fn validate(&self, notification: &mut Notification) {
        ValidationChain::new()
            .add_rule(NameRule::new("name"))
            .add_rule(DescriptionRule)
            .validate(self, notification);
    }
}

impl AggregateRoot for CastMember {
    type Id = CastMemberId;
    const NAME: &'static str = "CastMember";

    fn id(&self) -> CastMemberId {
        self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl Searchable for CastMember {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.name.as_str(), self.kind.as_str()];
        text.extend(self.description.as_deref());
        text
    }
}
