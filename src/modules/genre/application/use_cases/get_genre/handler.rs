use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
};

use super::{query::GetGenreByIdQuery, result::GenreOutput};

const USE_CASE: &str = "GetGenreById";

pub struct GetGenreByIdHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl GetGenreByIdHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self {
            genre_repository,
        }
    }
}

#[async_trait]
impl UseCase<GetGenreByIdQuery, GenreOutput> for GetGenreByIdHandler {
    async fn execute(
        &self,
        query: GetGenreByIdQuery,
    ) -> AppResult<UseCaseOutcome<GenreOutput>> {
        let found = match GenreId::from_string(&query.id) {
            Ok(id) => self.genre_repository.find_by_id(&id).await?,
            Err(_) => None,
        };

        match found {
            Some(genre) => Ok(Ok(GenreOutput::from(&genre))),
            None => {
                LogContext::use_case_not_found(USE_CASE, Genre::NAME, &query.id);
                Ok(Err(UseCaseFailure::not_found::<Genre>(&query.id)))
            }
        }
    }
}
