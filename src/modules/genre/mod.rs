//! Genres: named groupings of videos that belong to one or more categories.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::GenreRepository;
pub use domain::{Genre, GenreId};
pub use infrastructure::InMemoryGenreRepository;
