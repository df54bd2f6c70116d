use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::modules::cast_member::domain::{CastMember, CastMemberId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::Validate,
};

use super::{command::ChangeCastMemberStatusCommand, result::ChangeCastMemberStatusResult};

const USE_CASE: &str = "ChangeCastMemberStatus";

pub struct ChangeCastMemberStatusHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl ChangeCastMemberStatusHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl UseCase<ChangeCastMemberStatusCommand, ChangeCastMemberStatusResult>
    for ChangeCastMemberStatusHandler
{
    async fn execute(
        &self,
        command: ChangeCastMemberStatusCommand,
    ) -> AppResult<UseCaseOutcome<ChangeCastMemberStatusResult>> {
        let existing = match CastMemberId::from_string(&command.id) {
            Ok(id) => self.cast_member_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut cast_member) = existing else {
            LogContext::use_case_not_found(USE_CASE, CastMember::NAME, &command.id);
            return Ok(Err(UseCaseFailure::not_found::<CastMember>(&command.id)));
        };

        if command.active {
            cast_member.activate();
        } else {
            cast_member.deactivate();
        }

        let notification = cast_member.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.cast_member_repository.save(&cast_member).await?;
        LogContext::use_case_completed(USE_CASE, &saved.id().value());

        Ok(Ok(ChangeCastMemberStatusResult {
            id: saved.id(),
            is_active: saved.is_active(),
            deleted_at: saved.deleted_at(),
        }))
    }
}
