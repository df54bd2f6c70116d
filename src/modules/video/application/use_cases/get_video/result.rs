use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::cast_member::domain::CastMemberId;
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::GenreId;
use crate::modules::video::domain::{AudioVideoMedia, ImageMedia, Rating, Video, VideoId};
use crate::shared::domain::AggregateRoot;

/// Full read model of a video, media included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOutput {
    pub id: VideoId,
    pub title: String,
    pub description: Option<String>,
    pub year_launched: i32,
    pub duration: u32,
    pub opened: bool,
    pub published: bool,
    pub rating: Rating,
    pub categories_id: Vec<CategoryId>,
    pub genres_id: Vec<GenreId>,
    pub cast_members_id: Vec<CastMemberId>,
    pub trailer: Option<AudioVideoMedia>,
    pub video: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        let details = video.details();
        let medias = video.medias().clone();
        Self {
            id: video.id(),
            title: details.title.clone(),
            description: details.description.clone(),
            year_launched: details.year_launched,
            duration: details.duration,
            opened: details.opened,
            published: details.published,
            rating: details.rating,
            categories_id: video.categories().to_vec(),
            genres_id: video.genres().to_vec(),
            cast_members_id: video.cast_members().to_vec(),
            trailer: medias.trailer,
            video: medias.video,
            banner: medias.banner,
            thumbnail: medias.thumbnail,
            thumbnail_half: medias.thumbnail_half,
            is_active: video.is_active(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
            deleted_at: video.deleted_at(),
        }
    }
}
