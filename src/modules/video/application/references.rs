use std::sync::Arc;

use crate::modules::cast_member::application::{resolve_cast_member_ids, CastMemberRepository};
use crate::modules::cast_member::domain::CastMemberId;
use crate::modules::category::application::{resolve_category_ids, CategoryRepository};
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::application::{resolve_genre_ids, GenreRepository};
use crate::modules::genre::domain::GenreId;
use crate::shared::{errors::AppResult, validation::Notification};

/// Repositories of the aggregates a video points at
#[derive(Clone)]
pub struct ReferenceRepositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub cast_members: Arc<dyn CastMemberRepository>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedReferences {
    pub categories: Vec<CategoryId>,
    pub genres: Vec<GenreId>,
    pub cast_members: Vec<CastMemberId>,
}

impl ReferenceRepositories {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        genres: Arc<dyn GenreRepository>,
        cast_members: Arc<dyn CastMemberRepository>,
    ) -> Self {
        Self {
            categories,
            genres,
            cast_members,
        }
    }

    /// Checks all three reference lists; problems of every kind land in `notification`
    pub async fn resolve(
        &self,
        categories_id: &[String],
        genres_id: &[String],
        cast_members_id: &[String],
        notification: &mut Notification,
    ) -> AppResult<ResolvedReferences> {
        let categories =
            resolve_category_ids(self.categories.as_ref(), categories_id, notification).await?;
        let genres = resolve_genre_ids(self.genres.as_ref(), genres_id, notification).await?;
        let cast_members =
            resolve_cast_member_ids(self.cast_members.as_ref(), cast_members_id, notification)
                .await?;

        Ok(ResolvedReferences {
            categories,
            genres,
            cast_members,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::modules::cast_member::application::ports::MockCastMemberRepository;
    use crate::modules::category::application::ports::MockCategoryRepository;
    use crate::modules::genre::application::ports::MockGenreRepository;

    /// References whose repositories report every requested id as existing
    pub fn all_known() -> ReferenceRepositories {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_existing_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut genres = MockGenreRepository::new();
        genres.expect_existing_ids().returning(|ids| Ok(ids.to_vec()));
        let mut cast_members = MockCastMemberRepository::new();
        cast_members
            .expect_existing_ids()
            .returning(|ids| Ok(ids.to_vec()));

        ReferenceRepositories::new(
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        )
    }

    /// References whose repositories know nothing
    pub fn none_known() -> ReferenceRepositories {
        let mut categories = MockCategoryRepository::new();
        categories.expect_existing_ids().returning(|_| Ok(vec![]));
        let mut genres = MockGenreRepository::new();
        genres.expect_existing_ids().returning(|_| Ok(vec![]));
        let mut cast_members = MockCastMemberRepository::new();
        cast_members.expect_existing_ids().returning(|_| Ok(vec![]));

        ReferenceRepositories::new(
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        )
    }
}
