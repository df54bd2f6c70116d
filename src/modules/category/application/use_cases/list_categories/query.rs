use crate::shared::application::pagination::SearchQuery;

/// Paged, filtered listing of categories
#[derive(Debug, Clone, Default)]
pub struct ListCategoriesQuery {
    pub search: SearchQuery,
}

impl ListCategoriesQuery {
    pub fn new(search: SearchQuery) -> Self {
        Self { search }
    }
}

impl From<SearchQuery> for ListCategoriesQuery {
    fn from(search: SearchQuery) -> Self {
        Self::new(search)
    }
}
