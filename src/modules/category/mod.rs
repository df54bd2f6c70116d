//! Categories: thematic groupings referenced by genres and videos.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CategoryRepository;
pub use domain::{Category, CategoryId};
pub use infrastructure::InMemoryCategoryRepository;
