use async_trait::async_trait;

use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::modules::cast_member::domain::{CastMember, CastMemberId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
    infrastructure::InMemoryStore,
    utils::logger::LogContext,
};

#[derive(Default)]
pub struct InMemoryCastMemberRepository {
    store: InMemoryStore<CastMember>,
}

impl InMemoryCastMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CastMemberRepository for InMemoryCastMemberRepository {
    async fn save(&self, cast_member: &CastMember) -> AppResult<CastMember> {
        let saved = self.store.upsert(cast_member);
        LogContext::repository_operation("save", "CastMember", 1);
        Ok(saved)
    }

    async fn find_by_id(&self, id: &CastMemberId) -> AppResult<Option<CastMember>> {
        Ok(self.store.get(id))
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> AppResult<()> {
        let removed = self.store.remove(id);
        LogContext::repository_operation("delete", "CastMember", usize::from(removed));
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<CastMember>> {
        Ok(self.store.search(query))
    }

    async fn existing_ids(&self, ids: &[CastMemberId]) -> AppResult<Vec<CastMemberId>> {
        Ok(self.store.existing_ids(ids))
    }
}
