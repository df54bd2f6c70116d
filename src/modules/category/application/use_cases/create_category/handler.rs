use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::ports::CategoryRepository;
use crate::modules::category::domain::Category;
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::{LogContext, TimedOperation},
    validation::Validate,
};

use super::{command::CreateCategoryCommand, result::CreateCategoryResult};

const USE_CASE: &str = "CreateCategory";

/// Use case handler for creating a new category
pub struct CreateCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateCategoryCommand, CreateCategoryResult> for CreateCategoryHandler {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> AppResult<UseCaseOutcome<CreateCategoryResult>> {
        let timer = TimedOperation::new(USE_CASE);
        LogContext::use_case_started(USE_CASE, &command.name);

        let category =
            Category::new_category(command.name, command.description, command.is_active);

        let notification = category.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.category_repository.save(&category).await?;

        LogContext::use_case_completed(USE_CASE, &saved.id().value());
        timer.finish();
        Ok(Ok(CreateCategoryResult::new(saved.id())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::application::ports::MockCategoryRepository;
    use crate::shared::errors::AppError;

    fn handler_with(repository: MockCategoryRepository) -> CreateCategoryHandler {
        CreateCategoryHandler::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn persists_a_valid_category() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_save()
            .withf(|category: &Category| category.name() == "Movie" && category.is_active())
            .times(1)
            .returning(|category| Ok(category.clone()));

        let result = handler_with(repository)
            .execute(CreateCategoryCommand::new("Movie", None, true))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.id.value().len(), 26);
    }

    #[tokio::test]
    async fn rejects_blank_name_without_saving() {
        let mut repository = MockCategoryRepository::new();
        repository.expect_save().never();

        let failure = handler_with(repository)
            .execute(CreateCategoryCommand::new("", Some("desc".into()), true))
            .await
            .unwrap()
            .unwrap_err();

        let notification = failure.notification().unwrap();
        assert_eq!(notification.len(), 1);
        assert_eq!(notification.messages(), vec!["'name' should not be empty"]);
    }

    #[tokio::test]
    async fn propagates_storage_faults() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_save()
            .returning(|_| Err(AppError::StorageError("disk full".into())));

        let result = handler_with(repository)
            .execute(CreateCategoryCommand::new("Movie", None, true))
            .await;

        assert!(matches!(result, Err(AppError::StorageError(_))));
    }
}
