use async_trait::async_trait;

use crate::modules::video::domain::{Video, VideoId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
};

/// Port for video persistence; infrastructure provides the implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Insert or replace, returning the stored state
    async fn save(&self, video: &Video) -> AppResult<Video>;

    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>>;

    /// Removing an absent id succeeds
    async fn delete_by_id(&self, id: &VideoId) -> AppResult<()>;

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<Video>>;

    /// The subset of `ids` that exists, in the order given
    async fn existing_ids(&self, ids: &[VideoId]) -> AppResult<Vec<VideoId>>;
}
