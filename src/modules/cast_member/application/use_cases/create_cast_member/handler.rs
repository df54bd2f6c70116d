use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::modules::cast_member::domain::CastMember;
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::Validate,
};

use super::{command::CreateCastMemberCommand, result::CreateCastMemberResult};

const USE_CASE: &str = "CreateCastMember";

pub struct CreateCastMemberHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl CreateCastMemberHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateCastMemberCommand, CreateCastMemberResult> for CreateCastMemberHandler {
    async fn execute(
        &self,
        command: CreateCastMemberCommand,
    ) -> AppResult<UseCaseOutcome<CreateCastMemberResult>> {
        LogContext::use_case_started(USE_CASE, &command.name);

        let member = CastMember::new_cast_member(
            command.name,
            command.description,
            command.kind,
            command.is_active,
        );

        let notification = member.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.cast_member_repository.save(&member).await?;

        LogContext::use_case_completed(USE_CASE, &saved.id().value());
        Ok(Ok(CreateCastMemberResult { id: saved.id() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::application::ports::MockCastMemberRepository;
    use crate::modules::cast_member::domain::CastMemberType;

    #[tokio::test]
    async fn saves_a_director() {
        let mut repository = MockCastMemberRepository::new();
        repository
            .expect_save()
            .withf(|member: &CastMember| member.kind() == CastMemberType::Director)
            .times(1)
            .returning(|member| Ok(member.clone()));

        let outcome = CreateCastMemberHandler::new(Arc::new(repository))
            .execute(CreateCastMemberCommand::new(
                "Walter Salles",
                None,
                CastMemberType::Director,
                true,
            ))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn every_invalid_field_is_reported() {
        let mut repository = MockCastMemberRepository::new();
        repository.expect_save().never();

        let failure = CreateCastMemberHandler::new(Arc::new(repository))
            .execute(CreateCastMemberCommand::new(
                "",
                Some("d".repeat(4001)),
                CastMemberType::Actor,
                true,
            ))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(failure.notification().unwrap().len(), 2);
    }
}
