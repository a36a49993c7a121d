//! Drives a [`ContactFlow`] against a [`ContactSink`].

use crate::sink::ContactSink;
use crate::state::{ContactFlow, Transition};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

/// One form's submission pipeline.
///
/// The flow is shared so that the same pipeline can be submitted from
/// several tasks; only the first one in each submitting phase reaches the
/// sink.
pub struct ContactPipeline<S> {
    sink: S,
    flow: Arc<Mutex<ContactFlow>>,
}

impl<S: ContactSink> ContactPipeline<S> {
    #[must_use]
    pub fn new(sink: S, flow: ContactFlow) -> Self {
        Self {
            sink,
            flow: Arc::new(Mutex::new(flow)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ContactFlow> {
        self.flow.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the flow, e.g. to edit fields.
    pub fn with_flow<R>(&self, f: impl FnOnce(&mut ContactFlow) -> R) -> R {
        f(&mut self.lock())
    }

    /// Snapshot of the current flow.
    #[must_use]
    pub fn snapshot(&self) -> ContactFlow {
        self.lock().clone()
    }

    /// Submits the form once.
    ///
    /// Returns [`Transition::Ignored`] without contacting the sink when a
    /// submission is already in flight. Delivery failures are logged and
    /// reported as [`Transition::Failed`]; nothing is retried.
    pub async fn submit(&self, now: DateTime<Utc>) -> Transition {
        let Some(submission) = self.lock().begin(now) else {
            return Transition::Ignored;
        };

        let delivered = match self.sink.deliver(&submission).await {
            Ok(()) => true,
            Err(report) => {
                warn!(form = %submission.form, error = %report, "contact submission failed");
                false
            }
        };

        let transition = self.lock().finish(delivered);
        if let Transition::Success { event, .. } = &transition {
            info!(
                target: "analytics",
                event = event.name,
                form = %event.form,
                language = %event.language,
                "engagement"
            );
        }
        transition
    }

    /// Returns a finished flow to idle.
    pub fn reset_to_idle(&self) {
        self.lock().reset_to_idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;
    use crate::form::{ContactForm, ContactSubmission, FormTag};
    use crate::state::{FlowOptions, SubmissionState};
    use async_trait::async_trait;
    use lichtpunt_core::Locale;
    use rootcause::Report;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Records deliveries and answers with a fixed outcome.
    #[derive(Default)]
    struct ScriptedSink {
        fail: bool,
        calls: AtomicUsize,
        received: Mutex<Vec<ContactSubmission>>,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl ContactSink for ScriptedSink {
        async fn deliver(
            &self,
            submission: &ContactSubmission,
        ) -> Result<(), Report<ContactError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received
                .lock()
                .expect("lock")
                .push(submission.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                Err(ContactError::Rejected {
                    url: "https://hooks.example/test".to_string(),
                    status: 503,
                }
                .into())
            } else {
                Ok(())
            }
        }
    }

    fn filled(language: Locale) -> ContactFlow {
        let mut form = ContactForm::new(FormTag::contact(), language);
        form.name = "Anna".to_string();
        form.email = "anna@example.nl".to_string();
        form.phone = "0612345678".to_string();
        form.message = "Graag een afspraak".to_string();
        form.newsletter = true;
        ContactFlow::new(form, FlowOptions::thank_you_redirect())
    }

    #[tokio::test]
    async fn dutch_success_delivers_payload_and_redirects() {
        let pipeline = ContactPipeline::new(ScriptedSink::default(), filled(Locale::Nl));

        let transition = pipeline.submit(Utc::now()).await;

        let Transition::Success { redirect, event, .. } = transition else {
            panic!("expected success, got {transition:?}");
        };
        assert_eq!(redirect.as_deref(), Some("/bedankt"));
        assert_eq!(event.name, "generate_lead");

        let received = pipeline.sink.received.lock().expect("lock").clone();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Anna");
        assert_eq!(received[0].language, Locale::Nl);
        assert!(received[0].newsletter);

        let flow = pipeline.snapshot();
        assert_eq!(flow.state(), SubmissionState::Success);
        assert!(flow.form().name.is_empty());
        assert!(flow.form().email.is_empty());
        assert_eq!(flow.form().language, Locale::Nl);
    }

    #[tokio::test]
    async fn english_failure_keeps_fields() {
        let sink = ScriptedSink {
            fail: true,
            ..ScriptedSink::default()
        };
        let pipeline = ContactPipeline::new(sink, filled(Locale::En));

        assert_eq!(pipeline.submit(Utc::now()).await, Transition::Failed);

        let flow = pipeline.snapshot();
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(flow.form().name, "Anna");
        assert_eq!(flow.form().email, "anna@example.nl");
        assert_eq!(flow.form().message, "Graag een afspraak");
    }

    #[tokio::test]
    async fn concurrent_submit_reaches_sink_once() {
        let gate = Arc::new(Notify::new());
        let sink = ScriptedSink {
            gate: Some(Arc::clone(&gate)),
            ..ScriptedSink::default()
        };
        let pipeline = ContactPipeline::new(sink, filled(Locale::Nl));

        let (first, second, ()) = tokio::join!(
            pipeline.submit(Utc::now()),
            pipeline.submit(Utc::now()),
            async {
                tokio::task::yield_now().await;
                gate.notify_one();
            }
        );

        assert!(matches!(first, Transition::Success { .. }));
        assert_eq!(second, Transition::Ignored);
        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resubmit_after_success_is_a_new_delivery() {
        let pipeline = ContactPipeline::new(ScriptedSink::default(), filled(Locale::Nl));
        pipeline.submit(Utc::now()).await;

        pipeline.with_flow(|flow| {
            let form = flow.form_mut();
            form.name = "Bram".to_string();
            form.email = "bram@example.nl".to_string();
            form.message = "Nog een vraag".to_string();
        });
        pipeline.submit(Utc::now()).await;

        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 2);
        let received = pipeline.sink.received.lock().expect("lock").clone();
        assert_eq!(received[1].name, "Bram");
    }

    #[tokio::test]
    async fn reset_to_idle_after_success() {
        let pipeline = ContactPipeline::new(ScriptedSink::default(), filled(Locale::Nl));
        pipeline.submit(Utc::now()).await;
        pipeline.reset_to_idle();
        assert_eq!(pipeline.snapshot().state(), SubmissionState::Idle);
    }
}
