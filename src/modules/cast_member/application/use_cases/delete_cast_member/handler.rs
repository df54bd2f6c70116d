use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::modules::cast_member::domain::CastMemberId;
use crate::shared::{
    application::use_case::{UseCase, UseCaseOutcome},
    domain::Identifier,
    errors::AppResult,
    utils::logger::LogContext,
};

use super::command::DeleteCastMemberCommand;

const USE_CASE: &str = "DeleteCastMember";

pub struct DeleteCastMemberHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl DeleteCastMemberHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCastMemberCommand, ()> for DeleteCastMemberHandler {
    async fn execute(&self, command: DeleteCastMemberCommand) -> AppResult<UseCaseOutcome<()>> {
        // An id that cannot be parsed cannot be stored either
        if let Ok(id) = CastMemberId::from_string(&command.id) {
            self.cast_member_repository.delete_by_id(&id).await?;
        }

        LogContext::use_case_completed(USE_CASE, &command.id);
        Ok(Ok(()))
    }
}
