use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::ports::CategoryRepository;
use crate::modules::category::domain::{Category, CategoryId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::Validate,
};

use super::{command::ChangeCategoryStatusCommand, result::ChangeCategoryStatusResult};

const USE_CASE: &str = "ChangeCategoryStatus";

pub struct ChangeCategoryStatusHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl ChangeCategoryStatusHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<ChangeCategoryStatusCommand, ChangeCategoryStatusResult>
    for ChangeCategoryStatusHandler
{
    async fn execute(
        &self,
        command: ChangeCategoryStatusCommand,
    ) -> AppResult<UseCaseOutcome<ChangeCategoryStatusResult>> {
        let existing = match CategoryId::from_string(&command.id) {
            Ok(id) => self.category_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut category) = existing else {
            LogContext::use_case_not_found(USE_CASE, Category::NAME, &command.id);
            return Ok(Err(UseCaseFailure::not_found::<Category>(&command.id)));
        };

        if command.active {
            category.activate();
        } else {
            category.deactivate();
        }

        let notification = category.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.category_repository.save(&category).await?;
        LogContext::use_case_completed(USE_CASE, &saved.id().value());

        Ok(Ok(ChangeCategoryStatusResult {
            id: saved.id(),
            is_active: saved.is_active(),
            deleted_at: saved.deleted_at(),
        }))
    }
}
