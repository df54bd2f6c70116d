use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rating '{0}'")]
pub struct UnknownRating(pub String);

/// Age classification of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Especially recommended for children
    #[serde(rename = "ER")]
    Er,
    /// Free for all audiences
    #[serde(rename = "L")]
    L,
    #[serde(rename = "AGE_10")]
    Age10,
    #[serde(rename = "AGE_12")]
    Age12,
    #[serde(rename = "AGE_14")]
    Age14,
    #[serde(rename = "AGE_16")]
    Age16,
    #[serde(rename = "AGE_18")]
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Er,
        Rating::L,
        Rating::Age10,
        Rating::Age12,
        Rating::Age14,
        Rating::Age16,
        Rating::Age18,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "AGE_10",
            Rating::Age12 => "AGE_12",
            Rating::Age14 => "AGE_14",
            Rating::Age16 => "AGE_16",
            Rating::Age18 => "AGE_18",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = UnknownRating;

    /// Accepts the canonical names ("AGE_14") and the bare age ("14").
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_uppercase();
        Rating::ALL
            .into_iter()
            .find(|rating| {
                rating.as_str() == normalized
                    || rating.as_str().strip_prefix("AGE_") == Some(normalized.as_str())
            })
            .ok_or_else(|| UnknownRating(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_bare_ages() {
        assert_eq!("er".parse::<Rating>(), Ok(Rating::Er));
        assert_eq!("AGE_14".parse::<Rating>(), Ok(Rating::Age14));
        assert_eq!("18".parse::<Rating>(), Ok(Rating::Age18));
        assert!("21".parse::<Rating>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&Rating::Age10).unwrap(), "\"AGE_10\"");
        let parsed: Rating = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(parsed, Rating::L);
    }
}
