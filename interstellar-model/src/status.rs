use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of validating a single field, or of a whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Error,
    Warning,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown validation status: {0}")]
pub struct ParseStatusError(pub String);

impl ValidationStatus {
    pub const ALL: [ValidationStatus; 3] = [Self::Valid, Self::Error, Self::Warning];

    /// Canonical lowercase label, used verbatim on the wire.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Rank used to pick the overall outcome: valid < warning < error.
    pub const fn severity(&self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Warning => 1,
            Self::Error => 2,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Most severe status in `statuses`, or `Valid` when there are none.
    pub fn worst<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ValidationStatus>,
    {
        statuses
            .into_iter()
            .max_by_key(ValidationStatus::severity)
            .unwrap_or(Self::Valid)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ValidationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Self::Valid),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(ValidationStatus::Valid.label(), "valid");
        assert_eq!(ValidationStatus::Error.label(), "error");
        assert_eq!(ValidationStatus::Warning.label(), "warning");
    }

    #[test]
    fn serializes_as_label() {
        for status in ValidationStatus::ALL {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.label()));
            assert_eq!(status.to_string(), status.label());
            assert_eq!(status.label().parse::<ValidationStatus>(), Ok(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_uppercase() {
        assert!("VALID".parse::<ValidationStatus>().is_err());
        let err = "pending".parse::<ValidationStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown validation status: pending");
    }

    #[test]
    fn worst_prefers_error_then_warning() {
        use ValidationStatus::{Error, Valid, Warning};
        assert_eq!(ValidationStatus::worst(Vec::new()), Valid);
        assert_eq!(ValidationStatus::worst([Valid, Valid]), Valid);
        assert_eq!(ValidationStatus::worst([Valid, Warning, Valid]), Warning);
        assert_eq!(ValidationStatus::worst([Error, Warning, Valid]), Error);
    }

    #[test]
    fn predicates() {
        assert!(ValidationStatus::Valid.is_valid());
        assert!(ValidationStatus::Error.is_error());
        assert!(ValidationStatus::Warning.is_warning());
        assert!(!ValidationStatus::Warning.is_error());
    }
}
