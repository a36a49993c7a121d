//! Contact form handling for the Lichtpunt website.
//!
//! This crate provides:
//!
//! - **Form model**: the editable fields and the JSON payload sent out
//! - **Submission flow**: the `idle → submitting → success | error` state
//!   machine with its reentrancy guard
//! - **Pipeline**: drives the flow against a [`ContactSink`]
//! - **Webhook sink**: posts submissions to the automation webhook

pub mod error;
pub mod form;
pub mod pipeline;
pub mod sink;
pub mod state;
#[cfg(feature = "webhook")]
pub mod webhook;

pub use error::ContactError;
pub use form::{ContactForm, ContactSubmission, FieldError, FormTag};
pub use pipeline::ContactPipeline;
pub use sink::ContactSink;
pub use state::{ContactFlow, EngagementEvent, FlowOptions, SubmissionState, Transition};
#[cfg(feature = "webhook")]
pub use webhook::WebhookSink;
