use serde::Serialize;

use crate::modules::video::domain::{MediaKind, MediaStatus, VideoId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoMediaResult {
    pub id: VideoId,
    pub kind: MediaKind,
    /// Encoding status; absent for images
    pub status: Option<MediaStatus>,
}
