pub mod value_objects;
pub mod video;
pub mod video_validator;

pub use value_objects::{AudioVideoMedia, ImageMedia, MediaKind, MediaStatus, Rating};
pub use video::{Video, VideoDetails, VideoId, VideoMedias};
