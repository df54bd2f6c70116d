//! Administration core of a video catalog: categories, genres, cast members
//! and videos, with their validation rules, use cases and storage contracts.

pub mod app;
pub mod modules;
pub mod shared;

pub use app::{Catalog, Repositories};
pub use shared::application::{Pagination, SearchQuery, UseCaseFailure, UseCaseOutcome};
pub use shared::config::CatalogConfig;
pub use shared::errors::{AppError, AppResult};
pub use shared::validation::{Notification, ValidationError};
