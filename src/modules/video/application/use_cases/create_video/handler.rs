use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::application::references::ReferenceRepositories;
use crate::modules::video::domain::Video;
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::{LogContext, TimedOperation},
    validation::{Notification, Validate},
};

use super::{command::CreateVideoCommand, result::CreateVideoResult};

const USE_CASE: &str = "CreateVideo";

/// Use case handler for creating a video and linking it to existing
/// categories, genres and cast members
pub struct CreateVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
    references: ReferenceRepositories,
}

impl CreateVideoHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>, references: ReferenceRepositories) -> Self {
        Self {
            video_repository,
            references,
        }
    }
}

#[async_trait]
impl UseCase<CreateVideoCommand, CreateVideoResult> for CreateVideoHandler {
    async fn execute(
        &self,
        command: CreateVideoCommand,
    ) -> AppResult<UseCaseOutcome<CreateVideoResult>> {
        let timer = TimedOperation::new(USE_CASE);
        LogContext::use_case_started(USE_CASE, &command.title);

        let mut references = Notification::create();
        let resolved = self
            .references
            .resolve(
                &command.categories_id,
                &command.genres_id,
                &command.cast_members_id,
                &mut references,
            )
            .await?;

        let video = Video::new_video(
            command.details(),
            resolved.categories,
            resolved.genres,
            resolved.cast_members,
            command.is_active,
        );

        let mut notification = video.validation();
        notification.merge(references);
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.video_repository.save(&video).await?;

        LogContext::use_case_completed(USE_CASE, &saved.id().value());
        timer.finish();
        Ok(Ok(CreateVideoResult { id: saved.id() }))
    }
}
