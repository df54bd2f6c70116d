use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::GenreId;
use crate::shared::{
    application::use_case::{UseCase, UseCaseOutcome},
    domain::Identifier,
    errors::AppResult,
    utils::logger::LogContext,
};

use super::command::DeleteGenreCommand;

const USE_CASE: &str = "DeleteGenre";

pub struct DeleteGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl DeleteGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self {
            genre_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteGenreCommand, ()> for DeleteGenreHandler {
    async fn execute(&self, command: DeleteGenreCommand) -> AppResult<UseCaseOutcome<()>> {
        // An id that cannot be parsed cannot be stored either
        if let Ok(id) = GenreId::from_string(&command.id) {
            self.genre_repository.delete_by_id(&id).await?;
        }

        LogContext::use_case_completed(USE_CASE, &command.id);
        Ok(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::application::ports::MockGenreRepository;

    #[tokio::test]
    async fn deletes_by_parsed_id() {
        let id = GenreId::unique();
        let mut repository = MockGenreRepository::new();
        repository
            .expect_delete_by_id()
            .withf(move |target: &GenreId| *target == id)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = DeleteGenreHandler::new(Arc::new(repository))
            .execute(DeleteGenreCommand::new(id.value()))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }
}
