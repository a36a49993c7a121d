//! The contact form and its wire payload.

use chrono::{DateTime, Utc};
use lichtpunt_core::{Locale, UI};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which form on the site produced a submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormTag(String);

impl FormTag {
    /// The main form on the contact page.
    pub const CONTACT: &'static str = "contact";

    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn contact() -> Self {
        Self::new(Self::CONTACT)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The editable state of a contact form.
///
/// `form` and `language` are fixed by the page that renders the form and
/// survive [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub form: FormTag,
    pub language: Locale,
    pub newsletter: bool,
    #[serde(skip)]
    newsletter_default: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new(form: FormTag, language: Locale) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            form,
            language,
            newsletter: false,
            newsletter_default: false,
        }
    }

    /// Pre-ticks the newsletter box, also after every reset.
    #[must_use]
    pub fn with_newsletter_default(mut self, checked: bool) -> Self {
        self.newsletter = checked;
        self.newsletter_default = checked;
        self
    }

    /// Clears the user input. Keeps `form` and `language`.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.newsletter = self.newsletter_default;
    }

    /// Checks the required fields. Phone is optional.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if !looks_like_email(self.email.trim()) {
            errors.push(FieldError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Snapshot of the form as sent to the webhook.
    #[must_use]
    pub fn to_submission(&self, submitted_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            form: self.form.clone(),
            submitted_at,
            language: self.language,
            newsletter: self.newsletter,
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(' '),
        None => false,
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailInvalid,
    MessageRequired,
}

impl FieldError {
    /// Name of the offending input.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EmailInvalid => "email",
            Self::MessageRequired => "message",
        }
    }

    /// User-facing message in the given language.
    #[must_use]
    pub fn message(self, locale: Locale) -> &'static str {
        let ui = UI.get(locale);
        match self {
            Self::NameRequired => ui.form_name_required,
            Self::EmailInvalid => ui.form_email_invalid,
            Self::MessageRequired => ui.form_message_required,
        }
    }
}

/// JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub form: FormTag,
    pub submitted_at: DateTime<Utc>,
    pub language: Locale,
    pub newsletter: bool,
}

impl ContactSubmission {
    /// The form this submission was taken from.
    #[must_use]
    pub fn into_form(self) -> ContactForm {
        ContactForm {
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            form: self.form,
            language: self.language,
            newsletter: self.newsletter,
            newsletter_default: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled(tag: &str, language: Locale) -> ContactForm {
        let mut form = ContactForm::new(FormTag::new(tag), language);
        form.name = "Anna".to_string();
        form.email = "anna@example.nl".to_string();
        form.phone = "0612345678".to_string();
        form.message = "Graag een afspraak".to_string();
        form.newsletter = true;
        form
    }

    #[test]
    fn reset_keeps_tag_and_language() {
        let mut form = filled("intro-offer", Locale::En);
        form.reset();

        assert_eq!(form, ContactForm::new(FormTag::new("intro-offer"), Locale::En));
        assert_eq!(form.form.as_str(), "intro-offer");
        assert_eq!(form.language, Locale::En);
    }

    #[test]
    fn reset_restores_newsletter_default() {
        let mut form = ContactForm::new(FormTag::contact(), Locale::Nl).with_newsletter_default(true);
        form.newsletter = false;
        form.reset();
        assert!(form.newsletter);
    }

    #[test]
    fn validate_reports_every_failing_field() {
        let form = ContactForm::new(FormTag::contact(), Locale::Nl);
        assert_eq!(
            form.validate(),
            Err(vec![
                FieldError::NameRequired,
                FieldError::EmailInvalid,
                FieldError::MessageRequired
            ])
        );

        assert_eq!(filled("contact", Locale::Nl).validate(), Ok(()));
    }

    #[test]
    fn email_needs_both_sides_of_the_at() {
        for email in ["anna", "@example.nl", "anna@", "an na@example.nl"] {
            assert!(!looks_like_email(email), "{email}");
        }
        assert!(looks_like_email("anna@example.nl"));
    }

    #[test]
    fn field_messages_are_localized() {
        assert_eq!(FieldError::NameRequired.message(Locale::Nl), "Vul je naam in.");
        assert_eq!(
            FieldError::NameRequired.message(Locale::En),
            "Please enter your name."
        );
        assert_eq!(FieldError::EmailInvalid.field(), "email");
    }

    #[test]
    fn submission_payload_is_camel_case() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).single().expect("valid time");
        let submission = filled("contact", Locale::Nl).to_submission(at);
        let json = serde_json::to_value(&submission).expect("serialize");

        assert_eq!(json["name"], "Anna");
        assert_eq!(json["form"], "contact");
        assert_eq!(json["language"], "nl");
        assert_eq!(json["newsletter"], true);
        assert_eq!(json["submittedAt"], "2025-03-01T09:30:00Z");
        assert!(json.get("submitted_at").is_none());
    }

    #[test]
    fn submission_converts_back_to_form() {
        let form = filled("intro-offer", Locale::En);
        let back = form.to_submission(Utc::now()).into_form();
        assert_eq!(back.name, form.name);
        assert_eq!(back.form, form.form);
        assert_eq!(back.language, Locale::En);
        assert!(back.newsletter);
    }

    #[test]
    fn submission_trims_input() {
        let mut form = filled("contact", Locale::Nl);
        form.email = "  anna@example.nl ".to_string();
        let submission = form.to_submission(Utc::now());
        assert_eq!(submission.email, "anna@example.nl");
    }
}
