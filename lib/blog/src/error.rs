//! Error types for the blog crate.

use std::fmt;

/// Errors from loading blog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    /// Required CMS settings are absent.
    MissingCredentials { names: Vec<&'static str> },
    /// The HTTP client could not be constructed.
    ClientBuild { reason: String },
    /// The CMS could not be reached.
    Request { reason: String },
    /// The CMS answered with a non-success status.
    Status { status: u16 },
    /// The CMS response did not have the expected shape.
    Decode { reason: String },
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials { names } => {
                write!(f, "missing CMS configuration: {}", names.join(", "))
            }
            Self::ClientBuild { reason } => write!(f, "failed to build CMS client: {reason}"),
            Self::Request { reason } => write!(f, "CMS request failed: {reason}"),
            Self::Status { status } => write!(f, "CMS returned status {status}"),
            Self::Decode { reason } => write!(f, "invalid CMS response: {reason}"),
        }
    }
}

impl std::error::Error for BlogError {}
