use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::domain::{
    AudioVideoMedia, ImageMedia, MediaKind, MediaStatus, Video, VideoId,
};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
    validation::Validate,
};

use super::{command::UpdateVideoMediaCommand, result::UpdateVideoMediaResult};

const USE_CASE: &str = "UpdateVideoMedia";

pub struct UpdateVideoMediaHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl UpdateVideoMediaHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

fn audio_video_media(command: &UpdateVideoMediaCommand) -> AudioVideoMedia {
    let uploaded = AudioVideoMedia::new(&command.checksum, &command.name, &command.location);
    match command.status {
        MediaStatus::Pending => uploaded,
        MediaStatus::Processing => uploaded.processing(),
        MediaStatus::Completed => {
            uploaded.completed(command.encoded_location.clone().unwrap_or_default())
        }
        MediaStatus::Error => uploaded.failed(),
    }
}

#[async_trait]
impl UseCase<UpdateVideoMediaCommand, UpdateVideoMediaResult> for UpdateVideoMediaHandler {
    async fn execute(
        &self,
        command: UpdateVideoMediaCommand,
    ) -> AppResult<UseCaseOutcome<UpdateVideoMediaResult>> {
        LogContext::use_case_started(USE_CASE, &format!("{} of {}", command.kind, command.video_id));

        let existing = match VideoId::from_string(&command.video_id) {
            Ok(id) => self.video_repository.find_by_id(&id).await?,
            Err(_) => None,
        };
        let Some(mut video) = existing else {
            LogContext::use_case_not_found(USE_CASE, Video::NAME, &command.video_id);
            return Ok(Err(UseCaseFailure::not_found::<Video>(&command.video_id)));
        };

        let status = if command.kind.is_audio_video() {
            let media = audio_video_media(&command);
            let status = media.status;
            match command.kind {
                MediaKind::Trailer => video.set_trailer(media),
                _ => video.set_video(media),
            };
            Some(status)
        } else {
            let media = ImageMedia::new(&command.checksum, &command.name, &command.location);
            match command.kind {
                MediaKind::Banner => video.set_banner(media),
                MediaKind::Thumbnail => video.set_thumbnail(media),
                _ => video.set_thumbnail_half(media),
            };
            None
        };

        let notification = video.validation();
        if notification.has_errors() {
            LogContext::use_case_rejected(USE_CASE, notification.len());
            return Ok(Err(UseCaseFailure::invalid(notification)));
        }

        let saved = self.video_repository.save(&video).await?;
        LogContext::use_case_completed(USE_CASE, &saved.id().value());

        Ok(Ok(UpdateVideoMediaResult {
            id: saved.id(),
            kind: command.kind,
            status,
        }))
    }
}
