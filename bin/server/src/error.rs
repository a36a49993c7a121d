//! Domain error types for server functions.
//!
//! Details go to the log; the browser only ever sees the short messages
//! from [`SiteError::into_server_error`], and pages render their own
//! localized text on top of that.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A service was not registered as a request extension.
    MissingService { name: &'static str },
    /// A contact submission failed validation.
    InvalidSubmission { fields: Vec<&'static str> },
    /// The contact sink did not accept the submission.
    DeliveryFailed,
    /// The blog source failed.
    ContentUnavailable { details: String },
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingService { name } => write!(f, "service '{name}' is not available"),
            Self::InvalidSubmission { fields } => {
                write!(f, "invalid submission fields: {}", fields.join(", "))
            }
            Self::DeliveryFailed => write!(f, "contact submission was not delivered"),
            Self::ContentUnavailable { details } => write!(f, "blog content unavailable: {details}"),
        }
    }
}

impl std::error::Error for SiteError {}

impl SiteError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SiteError::MissingService { .. } => ServerFnError::new("Service unavailable"),
            SiteError::InvalidSubmission { fields } => {
                ServerFnError::new(format!("Invalid fields: {}", fields.join(",")))
            }
            SiteError::DeliveryFailed => ServerFnError::new("Submission failed"),
            SiteError::ContentUnavailable { .. } => ServerFnError::new("Content unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_hide_details() {
        let err = SiteError::ContentUnavailable {
            details: "CMS returned status 401".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(!err.into_server_error().to_string().contains("401"));
    }

    #[test]
    fn invalid_fields_are_listed() {
        let err = SiteError::InvalidSubmission {
            fields: vec!["name", "email"],
        };
        assert!(err.into_server_error().to_string().contains("name,email"));
    }
}
