use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::video::domain::{Rating, Video, VideoId};
use crate::shared::domain::AggregateRoot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListOutput {
    pub id: VideoId,
    pub title: String,
    pub description: Option<String>,
    pub year_launched: i32,
    pub duration: u32,
    pub rating: Rating,
    pub published: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoListOutput {
    fn from(video: Video) -> Self {
        let details = video.details();
        Self {
            id: video.id(),
            title: details.title.clone(),
            description: details.description.clone(),
            year_launched: details.year_launched,
            duration: details.duration,
            rating: details.rating,
            published: details.published,
            is_active: video.is_active(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}
