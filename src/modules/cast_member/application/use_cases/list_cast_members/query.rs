use crate::shared::application::pagination::SearchQuery;

/// Paged, filtered listing of cast members
#[derive(Debug, Clone, Default)]
pub struct ListCastMembersQuery {
    pub search: SearchQuery,
}

impl ListCastMembersQuery {
    pub fn new(search: SearchQuery) -> Self {
        Self { search }
    }
}

impl From<SearchQuery> for ListCastMembersQuery {
    fn from(search: SearchQuery) -> Self {
        Self::new(search)
    }
}
