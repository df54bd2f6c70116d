use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::{resolve_category_ids, CategoryRepository};
use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::{Notification, Validate},
};

use super::{command::UpdateGenreCommand, result::UpdateGenreResult};

const USE_CASE: &str = "UpdateGenre";

pub struct UpdateGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl UpdateGenreHandler {
    pub fn new(
        genre_repository: Arc<dyn GenreRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            genre_repository,
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<UpdateGenreCommand, UpdateGenreResult> for UpdateGenreHandler {
    async fn execute(
        &self,
        command: UpdateGenreCommand,
    ) -> AppResult<UseCaseOutcome<UpdateGenreResult>> {
        LogContext::use_case_started(USE_CASE, &command.id);

        let existing = match GenreId::from_string(&command.id) {
            Ok(id) => self.genre_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut genre) = existing else {
            LogContext::use_case_not_found(USE_CASE, Genre::NAME, &command.id);
            return Ok(Err(UseCaseFailure::not_found::<Genre>(&command.id)));
        };

        let mut references = Notification::create();
        let categories = resolve_category_ids(
            self.category_repository.as_ref(),
            &command.categories_id,
            &mut references,
        )
        .await?;

        genre.update(
            command.name,
            command.description,
            command.is_active,
            categories,
        );

        let mut notification = genre.validation();
        notification.merge(references);
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.genre_repository.save(&genre).await?;
        LogContext::use_case_completed(USE_CASE, &saved.id().value());

        Ok(Ok(UpdateGenreResult { id: saved.id() }))
    }
}
