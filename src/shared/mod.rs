// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Runtime configuration
pub mod domain; // Shared domain concepts (identity, lifecycle)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (in-memory storage)
pub mod utils; // Shared utilities (logging, time)
pub mod validation; // Notification pattern

pub use config::CatalogConfig;
pub use errors::{AppError, AppResult};
