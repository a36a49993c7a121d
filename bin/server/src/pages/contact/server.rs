//! Contact server functions.

use leptos::prelude::*;
use lichtpunt_contact::ContactSubmission;

/// Validates a submission and hands it to the configured contact sink.
#[server]
pub async fn submit_contact(submission: ContactSubmission) -> Result<(), ServerFnError> {
    use crate::error::SiteError;
    use crate::services::contact_sink;
    use chrono::Utc;
    use lichtpunt_contact::{ContactFlow, ContactPipeline, FlowOptions, Transition};
    use lichtpunt_core::SubmissionId;

    let submission_id = SubmissionId::new();
    let form = submission.into_form();

    if let Err(failed) = form.validate() {
        let fields: Vec<&'static str> = failed.iter().map(|e| e.field()).collect();
        tracing::info!(
            submission_id = %submission_id,
            fields = ?fields,
            "Rejected invalid contact submission"
        );
        return Err(SiteError::InvalidSubmission { fields }.into_server_error());
    }

    let sink = contact_sink().await.map_err(SiteError::into_server_error)?;
    let pipeline = ContactPipeline::new(sink, ContactFlow::new(form, FlowOptions::default()));

    match pipeline.submit(Utc::now()).await {
        Transition::Success { .. } => {
            tracing::info!(submission_id = %submission_id, "Contact submission delivered");
            Ok(())
        }
        Transition::Failed | Transition::Ignored => {
            tracing::warn!(submission_id = %submission_id, "Contact submission not delivered");
            Err(SiteError::DeliveryFailed.into_server_error())
        }
    }
}
