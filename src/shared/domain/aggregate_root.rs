use chrono::{DateTime, Utc};

use super::identifier::Identifier;
use super::lifecycle::Lifecycle;
use crate::shared::validation::Validate;

/// Root entity of a consistency boundary.
///
/// Identity is fixed at creation; equality of aggregates in the domain is
/// equality of their ids.
pub trait AggregateRoot: Validate + Clone + Send + Sync + 'static {
    type Id: Identifier;

    /// Human readable aggregate name, used in not-found messages and logs.
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    fn lifecycle(&self) -> &Lifecycle;

    fn is_active(&self) -> bool {
        self.lifecycle().is_active()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle().updated_at()
    }
}

/// Aggregates that list use cases can filter and sort.
pub trait Searchable: AggregateRoot {
    /// Value used when sorting by name (title for videos).
    fn sort_name(&self) -> &str;

    /// Text fields matched against search terms.
    fn search_text(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any searchable field.
    fn matches_terms(&self, terms: &str) -> bool {
        let needle = terms.to_lowercase();
        self.search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}
