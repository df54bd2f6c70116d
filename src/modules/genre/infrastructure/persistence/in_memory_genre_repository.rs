use async_trait::async_trait;

use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
    infrastructure::InMemoryStore,
    utils::logger::LogContext,
};

#[derive(Default)]
pub struct InMemoryGenreRepository {
    store: InMemoryStore<Genre>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn save(&self, genre: &Genre) -> AppResult<Genre> {
        let saved = self.store.upsert(genre);
        LogContext::repository_operation("save", "Genre", 1);
        Ok(saved)
    }

    async fn find_by_id(&self, id: &GenreId) -> AppResult<Option<Genre>> {
        Ok(self.store.get(id))
    }

    async fn delete_by_id(&self, id: &GenreId) -> AppResult<()> {
        let removed = self.store.remove(id);
        LogContext::repository_operation("delete", "Genre", usize::from(removed));
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<Genre>> {
        Ok(self.store.search(query))
    }

    async fn existing_ids(&self, ids: &[GenreId]) -> AppResult<Vec<GenreId>> {
        Ok(self.store.existing_ids(ids))
    }
}
