//! Submission state machine.
//!
//! ```text
//! idle ──begin──▶ submitting ──finish(ok)───▶ success ─┐
//!   ▲                 │                                │ reset_to_idle
//!   │                 └──────finish(err)──▶ error ─────┤
//!   └──────────────────────────────────────────────────┘
//! ```
//!
//! `begin` is refused while a submission is in flight, so at most one
//! delivery runs per form at a time.

use crate::form::{ContactForm, ContactSubmission, FormTag};
use chrono::{DateTime, Utc};
use lichtpunt_core::{Locale, PageId};
use std::time::Duration;

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

/// Per-page behaviour after a successful submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowOptions {
    /// Page to navigate to, in the form's language.
    pub redirect_on_success: Option<PageId>,
    /// Delay after which a finished form returns to idle.
    pub auto_reset: Option<Duration>,
}

impl FlowOptions {
    /// Main contact page: go to the thank-you page.
    #[must_use]
    pub fn thank_you_redirect() -> Self {
        Self {
            redirect_on_success: Some(PageId::ThankYou),
            auto_reset: None,
        }
    }

    /// Inline forms: show the success message in place, then clear it.
    #[must_use]
    pub fn inline(auto_reset: Duration) -> Self {
        Self {
            redirect_on_success: None,
            auto_reset: Some(auto_reset),
        }
    }
}

/// Conversion event raised after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementEvent {
    pub name: &'static str,
    pub form: FormTag,
    pub language: Locale,
}

impl EngagementEvent {
    pub const GENERATE_LEAD: &'static str = "generate_lead";
}

/// Outcome of [`ContactFlow::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Success {
        redirect: Option<String>,
        auto_reset: Option<Duration>,
        event: EngagementEvent,
    },
    Failed,
    /// `finish` or `submit` arrived outside the submitting phase.
    Ignored,
}

/// A contact form together with its submission state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    state: SubmissionState,
    options: FlowOptions,
}

impl ContactFlow {
    #[must_use]
    pub fn new(form: ContactForm, options: FlowOptions) -> Self {
        Self {
            form,
            state: SubmissionState::Idle,
            options,
        }
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Field edits are accepted in every state.
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn options(&self) -> FlowOptions {
        self.options
    }

    /// Enters `submitting` and returns the payload to deliver, or `None`
    /// when a submission is already in flight.
    pub fn begin(&mut self, now: DateTime<Utc>) -> Option<ContactSubmission> {
        if self.state.is_submitting() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(self.form.to_submission(now))
    }

    /// Records the delivery outcome.
    ///
    /// On success the form is reset, except for its tag and language. On
    /// failure the user's input is kept so they can retry.
    pub fn finish(&mut self, delivered: bool) -> Transition {
        if !self.state.is_submitting() {
            return Transition::Ignored;
        }

        if !delivered {
            self.state = SubmissionState::Error;
            return Transition::Failed;
        }

        self.state = SubmissionState::Success;
        let event = EngagementEvent {
            name: EngagementEvent::GENERATE_LEAD,
            form: self.form.form.clone(),
            language: self.form.language,
        };
        let redirect = self
            .options
            .redirect_on_success
            .map(|page| page.path(self.form.language));
        self.form.reset();

        Transition::Success {
            redirect,
            auto_reset: self.options.auto_reset,
            event,
        }
    }

    /// Returns a finished form to idle. No effect while submitting.
    pub fn reset_to_idle(&mut self) {
        if matches!(self.state, SubmissionState::Success | SubmissionState::Error) {
            self.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(options: FlowOptions, language: Locale) -> ContactFlow {
        let mut form = ContactForm::new(FormTag::contact(), language);
        form.name = "Anna".to_string();
        form.email = "anna@example.nl".to_string();
        form.message = "Hallo".to_string();
        ContactFlow::new(form, options)
    }

    #[test]
    fn second_begin_is_refused_while_submitting() {
        let mut flow = flow(FlowOptions::default(), Locale::Nl);
        assert!(flow.begin(Utc::now()).is_some());
        assert_eq!(flow.state(), SubmissionState::Submitting);
        assert!(flow.begin(Utc::now()).is_none());
        assert_eq!(flow.state(), SubmissionState::Submitting);
    }

    #[test]
    fn success_resets_form_and_redirects_in_form_language() {
        let mut flow = flow(FlowOptions::thank_you_redirect(), Locale::Nl);
        let submission = flow.begin(Utc::now()).expect("idle flow accepts submit");
        assert_eq!(submission.name, "Anna");

        let transition = flow.finish(true);
        assert_eq!(
            transition,
            Transition::Success {
                redirect: Some("/bedankt".to_string()),
                auto_reset: None,
                event: EngagementEvent {
                    name: "generate_lead",
                    form: FormTag::contact(),
                    language: Locale::Nl,
                },
            }
        );
        assert_eq!(flow.state(), SubmissionState::Success);
        assert!(flow.form().name.is_empty());
        assert_eq!(flow.form().form, FormTag::contact());
    }

    #[test]
    fn english_redirect_uses_english_path() {
        let mut flow = flow(FlowOptions::thank_you_redirect(), Locale::En);
        flow.begin(Utc::now());
        let Transition::Success { redirect, .. } = flow.finish(true) else {
            panic!("expected success");
        };
        assert_eq!(redirect.as_deref(), Some("/en/thank-you"));
    }

    #[test]
    fn failure_keeps_input() {
        let mut flow = flow(FlowOptions::default(), Locale::En);
        flow.begin(Utc::now());
        assert_eq!(flow.finish(false), Transition::Failed);
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(flow.form().name, "Anna");
        assert_eq!(flow.form().message, "Hallo");
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let mut flow = flow(FlowOptions::default(), Locale::Nl);
        flow.begin(Utc::now());
        flow.finish(false);
        assert!(flow.begin(Utc::now()).is_some());
    }

    #[test]
    fn finish_outside_submitting_is_ignored() {
        let mut flow = flow(FlowOptions::default(), Locale::Nl);
        assert_eq!(flow.finish(true), Transition::Ignored);
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(flow.form().name, "Anna");
    }

    #[test]
    fn inline_success_reports_auto_reset() {
        let mut flow = flow(FlowOptions::inline(Duration::from_secs(5)), Locale::Nl);
        flow.begin(Utc::now());
        let Transition::Success {
            redirect,
            auto_reset,
            ..
        } = flow.finish(true)
        else {
            panic!("expected success");
        };
        assert_eq!(redirect, None);
        assert_eq!(auto_reset, Some(Duration::from_secs(5)));

        flow.reset_to_idle();
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn reset_to_idle_does_not_interrupt_submission() {
        let mut flow = flow(FlowOptions::default(), Locale::Nl);
        flow.begin(Utc::now());
        flow.reset_to_idle();
        assert_eq!(flow.state(), SubmissionState::Submitting);
    }
}
