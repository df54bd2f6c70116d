use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::domain::VideoId;
use crate::shared::{
    application::use_case::{UseCase, UseCaseOutcome},
    domain::Identifier,
    errors::AppResult,
    utils::logger::LogContext,
};

use super::command::DeleteVideoCommand;

const USE_CASE: &str = "DeleteVideo";

pub struct DeleteVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl DeleteVideoHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self {
            video_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteVideoCommand, ()> for DeleteVideoHandler {
    async fn execute(&self, command: DeleteVideoCommand) -> AppResult<UseCaseOutcome<()>> {
        // An id that cannot be parsed cannot be stored either
        if let Ok(id) = VideoId::from_string(&command.id) {
            self.video_repository.delete_by_id(&id).await?;
        }

        LogContext::use_case_completed(USE_CASE, &command.id);
        Ok(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::application::ports::MockVideoRepository;

    #[tokio::test]
    async fn deletes_by_parsed_id() {
        let id = VideoId::unique();
        let mut repository = MockVideoRepository::new();
        repository
            .expect_delete_by_id()
            .withf(move |target: &VideoId| *target == id)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = DeleteVideoHandler::new(Arc::new(repository))
            .execute(DeleteVideoCommand::new(id.value()))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }
}
