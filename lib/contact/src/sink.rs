use crate::error::ContactError;
use crate::form::ContactSubmission;
use async_trait::async_trait;
use rootcause::Report;
use std::sync::Arc;

/// Destination for contact submissions.
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Delivers one submission. Called at most once per submit.
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), Report<ContactError>>;
}

#[async_trait]
impl<T: ContactSink + ?Sized> ContactSink for Arc<T> {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), Report<ContactError>> {
        (**self).deliver(submission).await
    }
}
