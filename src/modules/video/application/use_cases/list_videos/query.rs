use crate::shared::application::pagination::SearchQuery;

/// Paged, filtered listing of videos
#[derive(Debug, Clone, Default)]
pub struct ListVideosQuery {
    pub search: SearchQuery,
}

impl ListVideosQuery {
    pub fn new(search: SearchQuery) -> Self {
        Self { search }
    }
}

impl From<SearchQuery> for ListVideosQuery {
    fn from(search: SearchQuery) -> Self {
        Self::new(search)
    }
}
