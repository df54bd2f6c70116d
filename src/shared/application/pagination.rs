/// Search queries and paginated results
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const FIRST_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownSearchOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownSearchOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Name, or title for videos
    Name,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = UnknownSearchOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "name" | "title" => Ok(SortField::Name),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(SortField::UpdatedAt),
            other => Err(UnknownSearchOption::new("sort field", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = UnknownSearchOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(UnknownSearchOption::new("sort direction", value)),
        }
    }
}

/// Which lifecycle states a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveFilter {
    #[default]
    All,
    ActiveOnly,
    InactiveOnly,
}

impl ActiveFilter {
    pub fn accepts(&self, active: bool) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::ActiveOnly => active,
            ActiveFilter::InactiveOnly => !active,
        }
    }
}

impl FromStr for ActiveFilter {
    type Err = UnknownSearchOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(ActiveFilter::All),
            "active" => Ok(ActiveFilter::ActiveOnly),
            "inactive" => Ok(ActiveFilter::InactiveOnly),
            _ => Err(UnknownSearchOption::new("active filter", value)),
        }
    }
}

/// Search parameters understood by every repository.
///
/// `active_filter: None` means "use the configured default"; list use cases
/// resolve it before the query reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub terms: Option<String>,
    pub page: u32,
    pub per_page: u32,
    pub sort: SortField,
    pub direction: SortDirection,
    pub active_filter: Option<ActiveFilter>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            terms: None,
            page: FIRST_PAGE,
            per_page: DEFAULT_PAGE_SIZE,
            sort: SortField::default(),
            direction: SortDirection::default(),
            active_filter: None,
        }
    }
}

impl SearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: Option<String>,
        sort: SortField,
        direction: SortDirection,
    ) -> Self {
        Self {
            terms,
            page,
            per_page,
            sort,
            direction,
            active_filter: None,
        }
        .normalized(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    pub fn with_sort(mut self, sort: SortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    pub fn with_active_filter(mut self, filter: ActiveFilter) -> Self {
        self.active_filter = Some(filter);
        self
    }

    /// Clamps paging values and drops blank search terms.
    pub fn normalized(mut self, default_page_size: u32, max_page_size: u32) -> Self {
        self.page = self.page.max(FIRST_PAGE);
        if self.per_page == 0 {
            self.per_page = default_page_size;
        }
        self.per_page = self.per_page.min(max_page_size.max(1));
        self.terms = self
            .terms
            .map(|terms| terms.trim().to_string())
            .filter(|terms| !terms.is_empty());
        self
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> usize {
        (self.page.max(FIRST_PAGE) - 1) as usize * self.per_page as usize
    }

    /// Get limit for queries
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> Pagination<T> {
    pub fn new(items: Vec<T>, total_count: u64, current_page: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            current_page,
            page_size,
            total_pages,
        }
    }

    pub fn empty(query: &SearchQuery) -> Self {
        Self::new(Vec::new(), 0, query.page, query.per_page)
    }

    pub fn map<R>(self, mapper: impl FnMut(T) -> R) -> Pagination<R> {
        Pagination {
            items: self.items.into_iter().map(mapper).collect(),
            total_count: self.total_count,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > FIRST_PAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_normalizes_paging_and_terms() {
        let query = SearchQuery::new(
            0,
            0,
            Some("   ".to_string()),
            SortField::Name,
            SortDirection::Desc,
        );

        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(query.terms, None);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn search_query_caps_page_size() {
        let query = SearchQuery::empty()
            .with_page(3, 10_000)
            .with_terms("  drama ")
            .normalized(DEFAULT_PAGE_SIZE, 50);

        assert_eq!(query.per_page, 50);
        assert_eq!(query.offset(), 100);
        assert_eq!(query.terms.as_deref(), Some("drama"));
    }

    #[test]
    fn sort_options_parse_from_wire_names() {
        assert_eq!("title".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("createdAt".parse::<SortField>().unwrap(), SortField::CreatedAt);
        assert_eq!("updated_at".parse::<SortField>().unwrap(), SortField::UpdatedAt);
        assert!("rating".parse::<SortField>().is_err());

        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn active_filter_accepts_matching_states() {
        assert!(ActiveFilter::All.accepts(true) && ActiveFilter::All.accepts(false));
        assert!(ActiveFilter::ActiveOnly.accepts(true));
        assert!(!ActiveFilter::ActiveOnly.accepts(false));
        assert!(ActiveFilter::InactiveOnly.accepts(false));
        assert_eq!("inactive".parse::<ActiveFilter>().unwrap(), ActiveFilter::InactiveOnly);
    }

    #[test]
    fn pagination_computes_total_pages() {
        let page = Pagination::new(vec![1, 2, 3], 23, 2, 10);

        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page());
        assert!(page.has_previous_page());
    }

    #[test]
    fn empty_pagination_has_no_pages() {
        let page: Pagination<u8> = Pagination::empty(&SearchQuery::empty());

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page());
        assert!(!page.has_previous_page());
    }

    #[test]
    fn map_keeps_paging_metadata() {
        let page = Pagination::new(vec![1, 2], 2, 1, 10).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.page_size, 10);
    }
}
