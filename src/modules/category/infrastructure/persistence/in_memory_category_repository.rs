use async_trait::async_trait;

use crate::modules::category::application::ports::CategoryRepository;
use crate::modules::category::domain::{Category, CategoryId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
    infrastructure::InMemoryStore,
    utils::logger::LogContext,
};

/// Process-local category storage
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    store: InMemoryStore<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn save(&self, category: &Category) -> AppResult<Category> {
        let saved = self.store.upsert(category);
        LogContext::repository_operation("save", "Category", 1);
        Ok(saved)
    }

    async fn find_by_id(&self, id: &CategoryId) -> AppResult<Option<Category>> {
        Ok(self.store.get(id))
    }

    async fn delete_by_id(&self, id: &CategoryId) -> AppResult<()> {
        let removed = self.store.remove(id);
        LogContext::repository_operation("delete", "Category", usize::from(removed));
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<Category>> {
        Ok(self.store.search(query))
    }

    async fn existing_ids(&self, ids: &[CategoryId]) -> AppResult<Vec<CategoryId>> {
        Ok(self.store.existing_ids(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::application::pagination::{SortDirection, SortField};
    use crate::shared::domain::AggregateRoot;

    #[tokio::test]
    async fn save_find_and_delete() {
        let repository = InMemoryCategoryRepository::new();
        let category = Category::new_category("Movie", None, true);

        repository.save(&category).await.unwrap();
        let found = repository.find_by_id(&category.id()).await.unwrap();
        assert_eq!(found.unwrap().name(), "Movie");

        repository.delete_by_id(&category.id()).await.unwrap();
        repository.delete_by_id(&category.id()).await.unwrap();
        assert!(repository.find_by_id(&category.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_by_name_descending() {
        let repository = InMemoryCategoryRepository::new();
        for name in ["Anime", "Documentary", "Movie"] {
            repository
                .save(&Category::new_category(name, None, true))
                .await
                .unwrap();
        }

        let page = repository
            .search(&SearchQuery::empty().with_sort(SortField::Name, SortDirection::Desc))
            .await
            .unwrap();

        let names: Vec<&str> = page.items.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Movie", "Documentary", "Anime"]);
        assert_eq!(page.total_count, 3);
    }
}
