//! Identifier for contact submissions.
//!
//! Submissions are not stored by the site, but every one that reaches the
//! server gets a ULID so its log lines can be correlated with the webhook
//! side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse SubmissionId: {}", self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Unique identifier for one contact submission received by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Ulid);

impl SubmissionId {
    const PREFIX: &'static str = "sub";

    /// Creates a new ID with a randomly generated ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(s);

        Ulid::from_str(raw).map(Self).map_err(|e| ParseIdError {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let id = SubmissionId::new();
        assert!(id.to_string().starts_with("sub_"));
    }

    #[test]
    fn parse_with_and_without_prefix() {
        let id = SubmissionId::new();
        let parsed: SubmissionId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);

        let raw: SubmissionId = id.as_ulid().to_string().parse().expect("should parse");
        assert_eq!(id, raw);
    }

    #[test]
    fn parse_invalid() {
        let result: Result<SubmissionId, _> = "sub_nope".parse();
        assert!(result.is_err());
    }
}
