pub mod media;
pub mod rating;

pub use media::{AudioVideoMedia, ImageMedia, MediaKind, MediaStatus, UnknownMediaKind};
pub use rating::{Rating, UnknownRating};
