use async_trait::async_trait;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::domain::{Video, VideoId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
    infrastructure::InMemoryStore,
    utils::logger::LogContext,
};

/// Process-local video storage
#[derive(Default)]
pub struct InMemoryVideoRepository {
    store: InMemoryStore<Video>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn save(&self, video: &Video) -> AppResult<Video> {
        let saved = self.store.upsert(video);
        LogContext::repository_operation("save", "Video", 1);
        Ok(saved)
    }

    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>> {
        Ok(self.store.get(id))
    }

    async fn delete_by_id(&self, id: &VideoId) -> AppResult<()> {
        let removed = self.store.remove(id);
        LogContext::repository_operation("delete", "Video", usize::from(removed));
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<Video>> {
        let page = self.store.search(query);
        LogContext::repository_operation("search", "Video", page.items.len());
        Ok(page)
    }

    async fn existing_ids(&self, ids: &[VideoId]) -> AppResult<Vec<VideoId>> {
        Ok(self.store.existing_ids(ids))
    }
}
