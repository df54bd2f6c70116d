//! Use-case contract shared by every bounded context.
//!
//! A use case answers with two layers of `Result`:
//! - the outer [`AppResult`] carries infrastructure faults and is propagated with `?`;
//! - the inner [`UseCaseOutcome`] carries the regular, expected answers: a
//!   success value, a rejected command (with every validation error) or a
//!   missing aggregate.
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::shared::domain::AggregateRoot;
use crate::shared::errors::AppResult;
use crate::shared::validation::Notification;

/// Expected, non-fault reasons for a use case not to succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UseCaseFailure {
    /// The command broke one or more rules; nothing was persisted.
    Invalid(Notification),
    /// The targeted aggregate does not exist.
    #[serde(rename_all = "camelCase")]
    NotFound { aggregate: &'static str, id: String },
}

impl UseCaseFailure {
    pub fn invalid(notification: Notification) -> Self {
        UseCaseFailure::Invalid(notification)
    }

    pub fn not_found<A: AggregateRoot>(id: impl fmt::Display) -> Self {
        UseCaseFailure::NotFound {
            aggregate: A::NAME,
            id: id.to_string(),
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            UseCaseFailure::Invalid(notification) => Some(notification),
            UseCaseFailure::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UseCaseFailure::NotFound { .. })
    }
}

impl fmt::Display for UseCaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseCaseFailure::Invalid(notification) => {
                write!(f, "Validation failed: {}", notification)
            }
            UseCaseFailure::NotFound { aggregate, id } => {
                write!(f, "{} with ID {} was not found", aggregate, id)
            }
        }
    }
}

pub type UseCaseOutcome<T> = Result<T, UseCaseFailure>;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<UseCaseOutcome<TResult>>;
}

/// Base trait for queries that cannot fail for domain reasons (listings)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
