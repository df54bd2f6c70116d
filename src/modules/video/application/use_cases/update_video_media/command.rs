use crate::modules::video::domain::{MediaKind, MediaStatus};

/// Registers or replaces one media asset of a video.
///
/// `status` and `encoded_location` only apply to trailer and video files.
#[derive(Debug, Clone)]
pub struct UpdateVideoMediaCommand {
    pub video_id: String,
    pub kind: MediaKind,
    pub checksum: String,
    pub name: String,
    pub location: String,
    pub status: MediaStatus,
    pub encoded_location: Option<String>,
}

impl UpdateVideoMediaCommand {
    pub fn new(
        video_id: impl Into<String>,
        kind: MediaKind,
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            kind,
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
            status: MediaStatus::Pending,
            encoded_location: None,
        }
    }

    pub fn processing(mut self) -> Self {
        self.status = MediaStatus::Processing;
        self
    }

    pub fn completed(mut self, encoded_location: impl Into<String>) -> Self {
        self.status = MediaStatus::Completed;
        self.encoded_location = Some(encoded_location.into());
        self
    }

    pub fn failed(mut self) -> Self {
        self.status = MediaStatus::Error;
        self
    }
}
