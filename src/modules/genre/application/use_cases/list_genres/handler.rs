use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::ports::GenreRepository;
use crate::shared::{
    application::{pagination::Pagination, use_case::Query},
    config::CatalogConfig,
    errors::AppResult,
    utils::logger::TimedOperation,
};

use super::{query::ListGenresQuery, result::GenreListOutput};

pub struct ListGenresHandler {
    genre_repository: Arc<dyn GenreRepository>,
    config: CatalogConfig,
}

impl ListGenresHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>, config: CatalogConfig) -> Self {
        Self {
            genre_repository,
            config,
        }
    }
}

#[async_trait]
impl Query<ListGenresQuery, Pagination<GenreListOutput>> for ListGenresHandler {
    async fn execute(
        &self,
        query: ListGenresQuery,
    ) -> AppResult<Pagination<GenreListOutput>> {
        let timer = TimedOperation::new("ListGenres");
        let search = self.config.resolve_search(query.search);

        let page = self.genre_repository.search(&search).await?;

        timer.finish();
        Ok(page.map(GenreListOutput::from))
    }
}
