use async_trait::async_trait;

use crate::modules::cast_member::domain::{CastMember, CastMemberId};
use crate::shared::{
    application::pagination::{Pagination, SearchQuery},
    errors::AppResult,
};

/// Port for cast member persistence; infrastructure provides the implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CastMemberRepository: Send + Sync {
    /// Insert or replace, returning the stored state
    async fn save(&self, member: &CastMember) -> AppResult<CastMember>;

    async fn find_by_id(&self, id: &CastMemberId) -> AppResult<Option<CastMember>>;

    /// Removing an absent id succeeds
    async fn delete_by_id(&self, id: &CastMemberId) -> AppResult<()>;

    async fn search(&self, query: &SearchQuery) -> AppResult<Pagination<CastMember>>;

    /// The subset of `ids` that exists, in the order given
    async fn existing_ids(&self, ids: &[CastMemberId]) -> AppResult<Vec<CastMemberId>>;
}
