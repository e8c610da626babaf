//! Alert severity enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use reelhub_core::AppError;

/// Severity of a user-facing alert, determining its visual styling.
///
/// The enumeration is closed: every alert producer picks one of these
/// variants, and free-form severity strings are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A successful operation or positive outcome.
    Success,
    /// A neutral informational message.
    Info,
    /// A non-critical issue the user should be aware of.
    Warning,
    /// An error or failure terminal for the triggering action.
    Danger,
}

impl Severity {
    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            _ => Err(AppError::validation(format!("Unknown severity: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for severity in [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Danger,
        ] {
            let parsed: Severity = severity.as_str().parse().expect("parse");
            assert_eq!(parsed, severity);
        }
    }

    #[test]
    fn test_rejects_unknown_tags() {
        assert!("failure".parse::<Severity>().is_err());
    }
}
