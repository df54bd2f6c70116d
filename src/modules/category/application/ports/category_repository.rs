use async_trait::async_trait;

use crate::modules::category::domain::{Category, CategoryId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
};

/// Port for category persistence; infrastructure provides the implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert or replace, returning the stored state
    async fn save(&self, category: &Category) -> AppResult<Category>;

    async fn find_by_id(&self, id: &CategoryId) -> AppResult<Option<Category>>;

    /// Removing an absent id succeeds
    async fn delete_by_id(&self, id: &CategoryId) -> AppResult<()>;

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<Category>>;

    /// The subset of `ids` that exists, in the order given
    async fn existing_ids(&self, ids: &[CategoryId]) -> AppResult<Vec<CategoryId>>;
}
