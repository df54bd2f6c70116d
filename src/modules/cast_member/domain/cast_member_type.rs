use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cast member type '{0}'")]
pub struct UnknownCastMemberType(pub String);

/// Role a cast member plays in a production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastMemberType::Actor => "ACTOR",
            CastMemberType::Director => "DIRECTOR",
        }
    }
}

impl fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastMemberType {
    type Err = UnknownCastMemberType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "ACTOR" => Ok(CastMemberType::Actor),
            "DIRECTOR" => Ok(CastMemberType::Director),
            _ => Err(UnknownCastMemberType(value.to_string())),
        }
    }
}
