use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::domain::{Video, VideoId};
use crate::shared::{
    application::use_case::{UseCase, UseCaseFailure, UseCaseOutcome},
    domain::{AggregateRoot, Identifier},
    errors::AppResult,
    utils::logger::LogContext,
};

use super::{query::GetVideoByIdQuery, result::VideoOutput};

const USE_CASE: &str = "GetVideoById";

pub struct GetVideoByIdHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl GetVideoByIdHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self {
            video_repository,
        }
    }
}

#[async_trait]
impl UseCase<GetVideoByIdQuery, VideoOutput> for GetVideoByIdHandler {
    async fn execute(
        &self,
        query: GetVideoByIdQuery,
    ) -> AppResult<UseCaseOutcome<VideoOutput>> {
        let found = match VideoId::from_string(&query.id) {
            Ok(id) => self.video_repository.find_by_id(&id).await?,
            Err(_) => None,
        };

        match found {
            Some(video) => Ok(Ok(VideoOutput::from(&video))),
            None => {
                LogContext::use_case_not_found(USE_CASE, Video::NAME, &query.id);
                Ok(Err(UseCaseFailure::not_found::<Video>(&query.id)))
            }
        }
    }
}
