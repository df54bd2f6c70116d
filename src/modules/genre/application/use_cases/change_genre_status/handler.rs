use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::Validate,
};

use super::{command::ChangeGenreStatusCommand, result::ChangeGenreStatusResult};

const USE_CASE: &str = "ChangeGenreStatus";

pub struct ChangeGenreStatusHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl ChangeGenreStatusHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self {
            genre_repository,
        }
    }
}

#[async_trait]
impl UseCase<ChangeGenreStatusCommand, ChangeGenreStatusResult>
    for ChangeGenreStatusHandler
{
    async fn execute(
        &self,
        command: ChangeGenreStatusCommand,
    ) -> AppResult<UseCaseOutcome<ChangeGenreStatusResult>> {
        let existing = match GenreId::from_string(&command.id) {
            Ok(id) => self.genre_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut genre) = existing else {
            LogContext::use_case_not_found(USE_CASE, Genre::NAME, &command.id);
            return Ok(Err(UseCaseFailure::not_found::<Genre>(&command.id)));
        };

        if command.active {
            genre.activate();
        } else {
            genre.deactivate();
        }

        let notification = genre.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.genre_repository.save(&genre).await?;
        LogContext::use_case_completed(USE_CASE, &saved.id().value());

        Ok(Ok(ChangeGenreStatusResult {
            id: saved.id(),
            is_active: saved.is_active(),
            deleted_at: saved.deleted_at(),
        }))
    }
}
