use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::ports::CategoryRepository;
use crate::modules::category::domain::{Category, CategoryId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
};

use super::{query::GetCategoryByIdQuery, result::CategoryOutput};

const USE_CASE: &str = "GetCategoryById";

pub struct GetCategoryByIdHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryByIdHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<GetCategoryByIdQuery, CategoryOutput> for GetCategoryByIdHandler {
    async fn execute(
        &self,
        query: GetCategoryByIdQuery,
    ) -> AppResult<UseCaseOutcome<CategoryOutput>> {
        let found = match CategoryId::from_string(&query.id) {
            Ok(id) => self.category_repository.find_by_id(&id).await?,
            Err(_) => None,
        };

        match found {
            Some(category) => Ok(Ok(CategoryOutput::from(&category))),
            None => {
                LogContext::use_case_not_found(USE_CASE, Category::NAME, &query.id);
                Ok(Err(UseCaseFailure::not_found::<Category>(&query.id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::application::ports::MockCategoryRepository;

    #[tokio::test]
    async fn returns_the_stored_category() {
        let category = Category::new_category("Movie", Some("Films".into()), true);
        let stored = category.clone();
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let output = GetCategoryByIdHandler::new(Arc::new(repository))
            .execute(GetCategoryByIdQuery::new(category.id().value()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(output.id, category.id());
        assert_eq!(output.name, "Movie");
        assert_eq!(output.description.as_deref(), Some("Films"));
        assert!(output.is_active);
    }

    #[tokio::test]
    async fn malformed_id_is_not_found_without_lookup() {
        let mut repository = MockCategoryRepository::new();
        repository.expect_find_by_id().never();

        let failure = GetCategoryByIdHandler::new(Arc::new(repository))
            .execute(GetCategoryByIdQuery::new("123"))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(failure.to_string(), "Category with ID 123 was not found");
    }
}
