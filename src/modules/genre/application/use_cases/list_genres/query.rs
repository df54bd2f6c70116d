use crate::shared::application::pagination::SearchQuery;

/// Paged, filtered listing of genres
#[derive(Debug, Clone, Default)]
pub struct ListGenresQuery {
    pub search: SearchQuery,
}

impl ListGenresQuery {
    pub fn new(search: SearchQuery) -> Self {
        Self { search }
    }
}

impl From<SearchQuery> for ListGenresQuery {
    fn from(search: SearchQuery) -> Self {
        Self::new(search)
    }
}
