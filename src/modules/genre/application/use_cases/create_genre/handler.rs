use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::{resolve_category_ids, CategoryRepository};
use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::Genre;
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::{LogContext, TimedOperation},
    validation::{Notification, Validate},
};

use super::{command::CreateGenreCommand, result::CreateGenreResult};

const USE_CASE: &str = "CreateGenre";

/// Use case handler for creating a genre
pub struct CreateGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl CreateGenreHandler {
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
impl UseCase<CreateGenreCommand, CreateGenreResult> for CreateGenreHandler {
    async fn execute(
        &self,
        command: CreateGenreCommand,
    ) -> AppResult<UseCaseOutcome<CreateGenreResult>> {
        let timer = TimedOperation::new(USE_CASE);
        LogContext::use_case_started(USE_CASE, &command.name);

        let mut references = Notification::create();
        let categories = resolve_category_ids(
            self.category_repository.as_ref(),
            &command.categories_id,
            &mut references,
        )
        .await?;

        let genre = Genre::new_genre(
            command.name,
            command.description,
            categories,
            command.is_active,
        );

        let mut notification = genre.validation();
        notification.merge(references);
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.genre_repository.save(&genre).await?;

        LogContext::use_case_completed(USE_CASE, &saved.id().value());
        timer.finish();
        Ok(Ok(CreateGenreResult { id: saved.id() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::application::ports::MockCategoryRepository;
    use crate::modules::category::domain::CategoryId;
    use crate::modules::genre::application::ports::MockGenreRepository;

    #[tokio::test]
    async fn creates_genre_with_known_categories() {
        let category = CategoryId::unique();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_existing_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut genres = MockGenreRepository::new();
        genres
            .expect_save()
            .withf(move |genre: &Genre| genre.categories() == [category])
            .times(1)
            .returning(|genre| Ok(genre.clone()));

        let outcome = CreateGenreHandler::new(Arc::new(genres), Arc::new(categories))
            .execute(CreateGenreCommand::new(
                "Drama",
                None,
                vec![category.value()],
                true,
            ))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn accumulates_name_and_reference_errors() {
        let missing = CategoryId::unique();
        let mut categories = MockCategoryRepository::new();
        categories.expect_existing_ids().returning(|_| Ok(vec![]));
        let mut genres = MockGenreRepository::new();
        genres.expect_save().never();

        let failure = CreateGenreHandler::new(Arc::new(genres), Arc::new(categories))
            .execute(CreateGenreCommand::new(
                "",
                None,
                vec![missing.value(), "nope".into()],
                true,
            ))
            .await
            .unwrap()
            .unwrap_err();

        let messages = failure.notification().unwrap().messages();
        assert_eq!(
            messages,
            vec![
                "'name' should not be empty".to_string(),
                "the Id nope is invalid".to_string(),
                format!("Some categories could not be found: {}", missing),
            ]
        );
    }
}
