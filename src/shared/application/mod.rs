/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod pagination;
pub mod references;
pub mod use_case;

pub use pagination::*;
pub use references::{parse_references, report_missing};
pub use use_case::{Query, UseCase, UseCaseFailure, UseCaseOutcome};
