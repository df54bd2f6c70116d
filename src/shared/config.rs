use std::env;
use std::str::FromStr;

use crate::shared::application::pagination::{
    ActiveFilter, SearchQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE_VAR: &str = "CATALOG_DEFAULT_PAGE_SIZE";
pub const MAX_PAGE_SIZE_VAR: &str = "CATALOG_MAX_PAGE_SIZE";
pub const ACTIVE_FILTER_VAR: &str = "CATALOG_SEARCH_ACTIVE_FILTER";

/// Runtime settings of the catalog core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// Lifecycle filter applied by list use cases when a query names none
    pub default_active_filter: ActiveFilter,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            default_active_filter: ActiveFilter::All,
        }
    }
}

impl CatalogConfig {
    /// Load settings from the process environment (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_page_size = match lookup(DEFAULT_PAGE_SIZE_VAR) {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => defaults.default_page_size,
        };
        let max_page_size = match lookup(MAX_PAGE_SIZE_VAR) {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => defaults.max_page_size,
        };
        let default_active_filter = match lookup(ACTIVE_FILTER_VAR) {
            Some(raw) => ActiveFilter::from_str(&raw)
                .map_err(|e| AppError::ConfigurationError(format!("{}: {}", ACTIVE_FILTER_VAR, e)))?,
            None => defaults.default_active_filter,
        };

        let config = Self {
            default_page_size,
            max_page_size,
            default_active_filter,
        };
        config.validate()?;

        log::info!(
            "Catalog configured: page size {} (max {}), default active filter {:?}",
            config.default_page_size,
            config.max_page_size,
            config.default_active_filter
        );

        Ok(config)
    }

    pub fn with_default_active_filter(mut self, filter: ActiveFilter) -> Self {
        self.default_active_filter = filter;
        self
    }

    /// Applies page-size bounds and the default lifecycle filter to a listing query.
    pub fn resolve_search(&self, query: SearchQuery) -> SearchQuery {
        let mut query = query.normalized(self.default_page_size, self.max_page_size);
        if query.active_filter.is_none() {
            query.active_filter = Some(self.default_active_filter);
        }
        query
    }

    fn validate(&self) -> AppResult<()> {
        if self.default_page_size == 0 {
            return Err(AppError::ConfigurationError(format!(
                "{} must be at least 1",
                DEFAULT_PAGE_SIZE_VAR
            )));
        }
        if self.max_page_size < self.default_page_size {
            return Err(AppError::ConfigurationError(format!(
                "{} ({}) must not be smaller than {} ({})",
                MAX_PAGE_SIZE_VAR, self.max_page_size, DEFAULT_PAGE_SIZE_VAR, self.default_page_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (DEFAULT_PAGE_SIZE_VAR, "25"),
            (MAX_PAGE_SIZE_VAR, " 200 "),
            (ACTIVE_FILTER_VAR, "active"),
        ]))
        .unwrap();

        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_page_size, 200);
        assert_eq!(config.default_active_filter, ActiveFilter::ActiveOnly);
    }

    #[test]
    fn rejects_malformed_values() {
        for pairs in [
            vec![(DEFAULT_PAGE_SIZE_VAR, "ten")],
            vec![(DEFAULT_PAGE_SIZE_VAR, "0")],
            vec![(DEFAULT_PAGE_SIZE_VAR, "50"), (MAX_PAGE_SIZE_VAR, "20")],
            vec![(ACTIVE_FILTER_VAR, "sometimes")],
        ] {
            let result = CatalogConfig::from_lookup(lookup_from(&pairs));
            assert!(matches!(result, Err(AppError::ConfigurationError(_))));
        }
    }

    #[test]
    fn resolve_search_fills_in_defaults_but_keeps_explicit_filter() {
        let config = CatalogConfig::default().with_default_active_filter(ActiveFilter::ActiveOnly);

        let resolved = config.resolve_search(SearchQuery::empty().with_page(0, 500));
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.per_page, 100);
        assert_eq!(resolved.active_filter, Some(ActiveFilter::ActiveOnly));

        let explicit = config.resolve_search(
            SearchQuery::empty().with_active_filter(ActiveFilter::InactiveOnly),
        );
        assert_eq!(explicit.active_filter, Some(ActiveFilter::InactiveOnly));
    }
}
