//! Videos: the catalog's central aggregate, its media and its references to
//! categories, genres and cast members.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ReferenceRepositories, VideoRepository};
pub use domain::{Video, VideoId};
pub use infrastructure::InMemoryVideoRepository;
