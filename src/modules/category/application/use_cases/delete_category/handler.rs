use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::ports::CategoryRepository;
use crate::modules::category::domain::CategoryId;
use crate::shared::{
    application::use_case::{UseCase, UseCaseOutcome},
    domain::Identifier,
    errors::AppResult,
    utils::logger::LogContext,
};

use super::command::DeleteCategoryCommand;

const USE_CASE: &str = "DeleteCategory";

pub struct DeleteCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryCommand, ()> for DeleteCategoryHandler {
    async fn execute(&self, command: DeleteCategoryCommand) -> AppResult<UseCaseOutcome<()>> {
        // An id that cannot be parsed cannot be stored either
        if let Ok(id) = CategoryId::from_string(&command.id) {
            self.category_repository.delete_by_id(&id).await?;
        }

        LogContext::use_case_completed(USE_CASE, &command.id);
        Ok(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::application::ports::MockCategoryRepository;

    #[tokio::test]
    async fn deletes_by_parsed_id() {
        let id = CategoryId::unique();
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_delete_by_id()
            .withf(move |target: &CategoryId| *target == id)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = DeleteCategoryHandler::new(Arc::new(repository))
            .execute(DeleteCategoryCommand::new(id.value()))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn malformed_id_is_a_no_op() {
        let mut repository = MockCategoryRepository::new();
        repository.expect_delete_by_id().never();

        let outcome = DeleteCategoryHandler::new(Arc::new(repository))
            .execute(DeleteCategoryCommand::new("???"))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }
}
