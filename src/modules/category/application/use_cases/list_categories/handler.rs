use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::ports::CategoryRepository;
use crate::shared::{
    application::{pagination::Pagination, use_case::Query},
    config::CatalogConfig,
    errors::AppResult,
    utils::logger::TimedOperation,
};

use super::{query::ListCategoriesQuery, result::CategoryListOutput};

pub struct ListCategoriesHandler {
    category_repository: Arc<dyn CategoryRepository>,
    config: CatalogConfig,
}

impl ListCategoriesHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>, config: CatalogConfig) -> Self {
        Self {
            category_repository,
            config,
        }
    }
}

#[async_trait]
impl Query<ListCategoriesQuery, Pagination<CategoryListOutput>> for ListCategoriesHandler {
    async fn execute(
        &self,
        query: ListCategoriesQuery,
    ) -> AppResult<Pagination<CategoryListOutput>> {
        let timer = TimedOperation::new("ListCategories");
        let search = self.config.resolve_search(query.search);

        let page = self.category_repository.search(&search).await?;

        timer.finish();
        Ok(page.map(CategoryListOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::application::ports::MockCategoryRepository;
    use crate::modules::category::domain::Category;
    use crate::shared::application::pagination::{ActiveFilter, SearchQuery};

    #[tokio::test]
    async fn applies_configured_defaults_before_searching() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_search()
            .withf(|search: &SearchQuery| {
                search.active_filter == Some(ActiveFilter::ActiveOnly) && search.per_page == 5
            })
            .times(1)
            .returning(|search| {
                let items = vec![Category::new_category("Movie", None, true)];
                Ok(Pagination::new(items, 1, search.page, search.per_page))
            });

        let config = CatalogConfig {
            default_page_size: 5,
            ..CatalogConfig::default()
        }
        .with_default_active_filter(ActiveFilter::ActiveOnly);

        let page = ListCategoriesHandler::new(Arc::new(repository), config)
            .execute(ListCategoriesQuery::new(SearchQuery::empty().with_page(1, 0)))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Movie");
        assert_eq!(page.total_pages, 1);
    }
}
