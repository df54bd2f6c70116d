use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::application::references::ReferenceRepositories;
use crate::modules::video::domain::{Video, VideoId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::{Notification, Validate},
};

use super::{command::UpdateVideoCommand, result::UpdateVideoResult};

const USE_CASE: &str = "UpdateVideo";

pub struct UpdateVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
    references: ReferenceRepositories,
}

impl UpdateVideoHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>, references: ReferenceRepositories) -> Self {
        Self {
            video_repository,
            references,
        }
    }
}

#[async_trait]
impl UseCase<UpdateVideoCommand, UpdateVideoResult> for UpdateVideoHandler {
    async fn execute(
        &self,
        command: UpdateVideoCommand,
    ) -> AppResult<UseCaseOutcome<UpdateVideoResult>> {
        LogContext::use_case_started(USE_CASE, &command.id);

        let existing = match VideoId::from_string(&command.id) {
            Ok(id) => self.video_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut video) = existing else {
            LogContext::use_case_not_found(USE_CASE, Video::NAME, &command.id);
            return Ok(Err(UseCaseFailure::not_found::<Video>(&command.id)));
        };

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

        video.update(
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

        Ok(Ok(UpdateVideoResult { id: saved.id() }))
    }
}
