use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::shared::{
    application::{pagination::Pagination, use_case::Query},
    config::CatalogConfig,
    errors::AppResult,
    utils::logger::TimedOperation,
};

use super::{query::ListCastMembersQuery, result::CastMemberListOutput};

pub struct ListCastMembersHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
    config: CatalogConfig,
}

impl ListCastMembersHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>, config: CatalogConfig) -> Self {
        Self {
            cast_member_repository,
            config,
        }
    }
}

#[async_trait]
impl Query<ListCastMembersQuery, Pagination<CastMemberListOutput>> for ListCastMembersHandler {
    async fn execute(
        &self,
        query: ListCastMembersQuery,
    ) -> AppResult<Pagination<CastMemberListOutput>> {
        let timer = TimedOperation::new("ListCastMembers");
        let search = self.config.resolve_search(query.search);

        let page = self.cast_member_repository.search(&search).await?;

        timer.finish();
        Ok(page.map(CastMemberListOutput::from))
    }
}
