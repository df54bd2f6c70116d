use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::domain::{Video, VideoId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::Validate,
};

use super::{command::ChangeVideoStatusCommand, result::ChangeVideoStatusResult};

const USE_CASE: &str = "ChangeVideoStatus";

pub struct ChangeVideoStatusHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl ChangeVideoStatusHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self {
            video_repository,
        }
    }
}

#[async_trait]
impl UseCase<ChangeVideoStatusCommand, ChangeVideoStatusResult>
    for ChangeVideoStatusHandler
{
    async fn execute(
        &self,
        command: ChangeVideoStatusCommand,
    ) -> AppResult<UseCaseOutcome<ChangeVideoStatusResult>> {
        let existing = match VideoId::from_string(&command.id) {
            Ok(id) => self.video_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut video) = existing else {
            LogContext::use_case_not_found(USE_CASE, Video::NAME, &command.id);
            return Ok(Err(UseCaseFailure::not_found::<Video>(&command.id)));
        };

        if command.active {
            video.activate();
        } else {
            video.deactivate();
        }

        let notification = video.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.video_repository.save(&video).await?;
        LogContext::use_case_completed(USE_CASE, &saved.id().value());

        Ok(Ok(ChangeVideoStatusResult {
            id: saved.id(),
            is_active: saved.is_active(),
            deleted_at: saved.deleted_at(),
        }))
    }
}
