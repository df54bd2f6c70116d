//! Thread-safe, in-process storage engine behind every in-memory repository.
use dashmap::DashMap;
use std::cmp::Ordering;

use crate::shared::application::pagination::{
    ActiveFilter, Pagination, SearchQuery, SortDirection, SortField,
};
use crate::shared::domain::Searchable;

pub struct InMemoryStore<A: Searchable> {
    entries: DashMap<A::Id, A>,
}

impl<A: Searchable> InMemoryStore<A> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert when the id is unseen, replace otherwise.
    pub fn upsert(&self, aggregate: &A) -> A {
        self.entries.insert(aggregate.id(), aggregate.clone());
        aggregate.clone()
    }

    pub fn get(&self, id: &A::Id) -> Option<A> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Returns whether something was removed; removing an absent id is not an error.
    pub fn remove(&self, id: &A::Id) -> bool {
        self.entries.remove(id).is_some()
    }

    /// The subset of `ids` that is stored, in the order given.
    pub fn existing_ids(&self, ids: &[A::Id]) -> Vec<A::Id> {
        ids.iter()
            .filter(|id| self.entries.contains_key(id))
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filters, sorts (ties by id ascending) and pages a snapshot of the store.
    pub fn search(&self, query: &SearchQuery) -> Pagination<A> {
        let filter = query.active_filter.unwrap_or(ActiveFilter::All);
        let terms = query.terms.as_deref();

        let mut matches: Vec<A> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|aggregate| filter.accepts(aggregate.is_active()))
            .filter(|aggregate| terms.map_or(true, |t| aggregate.matches_terms(t)))
            .collect();

        matches.sort_by(|a, b| compare(a, b, query.sort, query.direction));

        let total = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip(query.offset())
            .take(query.limit())
            .collect();

        Pagination::new(items, total, query.page, query.per_page)
    }
}

impl<A: Searchable> Default for InMemoryStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn compare<A: Searchable>(a: &A, b: &A, sort: SortField, direction: SortDirection) -> Ordering {
    let primary = match sort {
        SortField::Name => a
            .sort_name()
            .to_lowercase()
            .cmp(&b.sort_name().to_lowercase()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    };

    let primary = match direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };

    primary.then_with(|| a.id().cmp(&b.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::{AggregateRoot, Identifier, Lifecycle};
    use crate::shared::validation::{Notification, Validate};

    crate::entity_id!(NoteId);

    #[derive(Debug, Clone)]
    struct Note {
        id: NoteId,
        title: String,
        lifecycle: Lifecycle,
    }

    impl Note {
        fn new(title: &str, active: bool) -> Self {
            Self {
                id: NoteId::unique(),
                title: title.to_string(),
                lifecycle: Lifecycle::new(active),
            }
        }
    }

    impl Validate for Note {
        fn validate(&self, _notification: &mut Notification) {}
    }

    impl AggregateRoot for Note {
        type Id = NoteId;
        const NAME: &'static str = "Note";

        fn id(&self) -> NoteId {
            self.id
        }

        fn lifecycle(&self) -> &Lifecycle {
            &self.lifecycle
        }
    }

    impl Searchable for Note {
        fn sort_name(&self) -> &str {
            &self.title
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.title]
        }
    }

    fn by_name(direction: SortDirection) -> SearchQuery {
        SearchQuery::empty().with_sort(SortField::Name, direction)
    }

    #[test]
    fn upsert_replaces_existing_entry() {
        let store = InMemoryStore::new();
        let mut note = Note::new("draft", true);
        store.upsert(&note);

        note.title = "final".to_string();
        store.upsert(&note);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&note.id).unwrap().title, "final");
    }

    #[test]
    fn remove_is_idempotent() {
        let store = InMemoryStore::new();
        let note = Note::new("gone", true);
        store.upsert(&note);

        assert!(store.remove(&note.id));
        assert!(!store.remove(&note.id));
        assert!(store.is_empty());
    }

    #[test]
    fn existing_ids_keeps_requested_order() {
        let store = InMemoryStore::new();
        let a = Note::new("a", true);
        let b = Note::new("b", true);
        store.upsert(&a);
        store.upsert(&b);
        let missing = NoteId::unique();

        assert_eq!(store.existing_ids(&[b.id, missing, a.id]), vec![b.id, a.id]);
    }

    #[test]
    fn ties_are_broken_by_id_ascending() {
        let store = InMemoryStore::new();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let note = Note::new("same", true);
            ids.push(note.id);
            store.upsert(&note);
        }
        ids.sort();

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let page = store.search(&by_name(direction));
            let found: Vec<_> = page.items.iter().map(|n| n.id).collect();
            assert_eq!(found, ids);
        }
    }

    #[test]
    fn repeated_searches_return_identical_order() {
        let store = InMemoryStore::new();
        for title in ["b", "a", "c", "a", "b"] {
            store.upsert(&Note::new(title, true));
        }
        let query = by_name(SortDirection::Desc).with_page(1, 3);

        let first: Vec<_> = store.search(&query).items.iter().map(|n| n.id).collect();
        let second: Vec<_> = store.search(&query).items.iter().map(|n| n.id).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn filters_by_terms_and_lifecycle() {
        let store = InMemoryStore::new();
        store.upsert(&Note::new("Drama", true));
        store.upsert(&Note::new("Melodrama", false));
        store.upsert(&Note::new("Comedy", true));

        let all = store.search(&SearchQuery::empty().with_terms("DRAMA"));
        assert_eq!(all.total_count, 2);

        let active = store.search(
            &SearchQuery::empty()
                .with_terms("drama")
                .with_active_filter(ActiveFilter::ActiveOnly),
        );
        assert_eq!(active.total_count, 1);
        assert_eq!(active.items[0].title, "Drama");

        let inactive =
            store.search(&SearchQuery::empty().with_active_filter(ActiveFilter::InactiveOnly));
        assert_eq!(inactive.items.len(), 1);
        assert_eq!(inactive.items[0].title, "Melodrama");
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let store = InMemoryStore::new();
        for title in ["a", "b", "c"] {
            store.upsert(&Note::new(title, true));
        }

        let page = store.search(&by_name(SortDirection::Asc).with_page(3, 2));

        assert!(page.is_empty());
        assert_eq!(page.total_count, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 3);
    }

    #[test]
    fn empty_store_returns_empty_page() {
        let store: InMemoryStore<Note> = InMemoryStore::new();
        let page = store.search(&SearchQuery::empty());

        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
