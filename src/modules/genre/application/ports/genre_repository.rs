use async_trait::async_trait;

use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
};

/// Port for genre persistence; infrastructure provides the implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Insert or replace, returning the stored state
    async fn save(&self, genre: &Genre) -> AppResult<Genre>;

    async fn find_by_id(&self, id: &GenreId) -> AppResult<Option<Genre>>;

    /// Removing an absent id succeeds
    async fn delete_by_id(&self, id: &GenreId) -> AppResult<()>;

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<Genre>>;

    /// The subset of `ids` that exists, in the order given
    async fn existing_ids(&self, ids: &[GenreId]) -> AppResult<Vec<GenreId>>;
}
