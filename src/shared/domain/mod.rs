//! Shared domain kernel: identity and lifecycle
pub mod aggregate_root;
pub mod identifier;
pub mod lifecycle;

pub use aggregate_root::{AggregateRoot, Searchable};
pub use identifier::{Identifier, InvalidIdentifier};
pub use lifecycle::Lifecycle;
