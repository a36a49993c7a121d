//! Error types for the contact crate.

use std::fmt;

/// Errors from delivering a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The HTTP client could not be constructed.
    ClientBuild { reason: String },
    /// The request never produced a response.
    Transport { url: String, reason: String },
    /// The webhook answered with a non-success status.
    Rejected { url: String, status: u16 },
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { reason } => {
                write!(f, "failed to build webhook client: {reason}")
            }
            Self::Transport { url, reason } => {
                write!(f, "webhook request to {url} failed: {reason}")
            }
            Self::Rejected { url, status } => {
                write!(f, "webhook {url} rejected submission with status {status}")
            }
        }
    }
}

impl std::error::Error for ContactError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ContactError::Rejected {
            url: "https://hooks.example/abc".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "webhook https://hooks.example/abc rejected submission with status 500"
        );
    }
}
