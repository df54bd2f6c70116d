//! Sortable entity identifiers backed by ULIDs.
//!
//! Every aggregate gets its own id type through [`entity_id!`](crate::entity_id),
//! so a `CategoryId` can never be passed where a `GenreId` is expected.
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;

use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the Id {value} is invalid")]
pub struct InvalidIdentifier {
    pub value: String,
}

impl InvalidIdentifier {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Converts into a validation error attached to `field`.
    pub fn at(self, field: &str) -> ValidationError {
        ValidationError::invalid_id(field, &self.value)
    }
}

impl From<InvalidIdentifier> for ValidationError {
    fn from(err: InvalidIdentifier) -> Self {
        err.at("id")
    }
}

/// 26-character, lowercase, lexicographically sortable identifier.
pub trait Identifier:
    Copy + Eq + Ord + Hash + Display + Debug + Send + Sync + 'static
{
    /// Generates a fresh identifier from the current time and randomness.
    fn unique() -> Self;

    /// Parses an identifier, accepting any letter case.
    fn from_string(value: &str) -> Result<Self, InvalidIdentifier>;

    fn value(&self) -> String {
        self.to_string()
    }
}

/// Declares a ULID-backed identifier type implementing [`Identifier`].
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(::ulid::Ulid);

        impl $crate::shared::domain::Identifier for $name {
            fn unique() -> Self {
                Self(::ulid::Ulid::new())
            }

            fn from_string(
                value: &str,
            ) -> Result<Self, $crate::shared::domain::InvalidIdentifier> {
                let trimmed = value.trim();
                // The decoder wraps values above 7ZZZ…Z instead of rejecting them
                match ::ulid::Ulid::from_string(trimmed) {
                    Ok(ulid) if ulid.to_string().eq_ignore_ascii_case(trimmed) => Ok(Self(ulid)),
                    _ => Err($crate::shared::domain::InvalidIdentifier::new(value)),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0.to_string().to_lowercase())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::shared::domain::InvalidIdentifier;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as $crate::shared::domain::Identifier>::from_string(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::shared::domain::InvalidIdentifier;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <Self as $crate::shared::domain::Identifier>::from_string(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}
