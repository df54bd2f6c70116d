use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::modules::cast_member::domain::{CastMember, CastMemberId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
};

use super::{query::GetCastMemberByIdQuery, result::CastMemberOutput};

const USE_CASE: &str = "GetCastMemberById";

pub struct GetCastMemberByIdHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl GetCastMemberByIdHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl UseCase<GetCastMemberByIdQuery, CastMemberOutput> for GetCastMemberByIdHandler {
    async fn execute(
        &self,
        query: GetCastMemberByIdQuery,
    ) -> AppResult<UseCaseOutcome<CastMemberOutput>> {
        let found = match CastMemberId::from_string(&query.id) {
            Ok(id) => self.cast_member_repository.find_by_id(&id).await?,
            Err(_) => None,
        };

        match found {
            Some(cast_member) => Ok(Ok(CastMemberOutput::from(&cast_member))),
            None => {
                LogContext::use_case_not_found(USE_CASE, CastMember::NAME, &query.id);
                Ok(Err(UseCaseFailure::not_found::<CastMember>(&query.id)))
            }
        }
    }
}
