//! Media assets attached to a video.
//!
//! Media values are immutable: a status transition returns a new value.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::shared::validation::{validation_rules::require_not_blank, Notification};

/// Encoding progress of an audio/video file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

/// Slot of a video a media asset is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Trailer,
    Video,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media kind '{0}'")]
pub struct UnknownMediaKind(pub String);

impl MediaKind {
    /// Whether the slot holds an audio/video file rather than an image
    pub fn is_audio_video(&self) -> bool {
        matches!(self, MediaKind::Trailer | MediaKind::Video)
    }

    /// Field name used in validation messages
    pub fn field(&self) -> &'static str {
        match self {
            MediaKind::Trailer => "trailer",
            MediaKind::Video => "video",
            MediaKind::Banner => "banner",
            MediaKind::Thumbnail => "thumbnail",
            MediaKind::ThumbnailHalf => "thumbnailHalf",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('_', "").as_str() {
            "trailer" => Ok(MediaKind::Trailer),
            "video" => Ok(MediaKind::Video),
            "banner" => Ok(MediaKind::Banner),
            "thumbnail" => Ok(MediaKind::Thumbnail),
            "thumbnailhalf" => Ok(MediaKind::ThumbnailHalf),
            _ => Err(UnknownMediaKind(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMedia {
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl ImageMedia {
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    /// Appends errors under `<field>.<attribute>`
    pub fn validate_at(&self, field: &str, notification: &mut Notification) {
        require_not_blank(&format!("{}.checksum", field), &self.checksum, notification);
        require_not_blank(&format!("{}.name", field), &self.name, notification);
        require_not_blank(&format!("{}.location", field), &self.location, notification);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioVideoMedia {
    pub checksum: String,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: Option<String>,
    pub status: MediaStatus,
}

impl AudioVideoMedia {
    /// A freshly uploaded file awaiting encoding
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: None,
            status: MediaStatus::Pending,
        }
    }

    pub fn processing(&self) -> Self {
        Self {
            status: MediaStatus::Processing,
            ..self.clone()
        }
    }

    pub fn completed(&self, encoded_location: impl Into<String>) -> Self {
        Self {
            encoded_location: Some(encoded_location.into()),
            status: MediaStatus::Completed,
            ..self.clone()
        }
    }

    pub fn failed(&self) -> Self {
        Self {
            status: MediaStatus::Error,
            ..self.clone()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MediaStatus::Completed
    }

    /// Appends errors under `<field>.<attribute>`; a completed file needs its encoded location
    pub fn validate_at(&self, field: &str, notification: &mut Notification) {
        require_not_blank(&format!("{}.checksum", field), &self.checksum, notification);
        require_not_blank(&format!("{}.name", field), &self.name, notification);
        require_not_blank(&format!("{}.rawLocation", field), &self.raw_location, notification);
        if self.is_completed() {
            require_not_blank(
                &format!("{}.encodedLocation", field),
                self.encoded_location.as_deref().unwrap_or_default(),
                notification,
            );
        }
    }
}
