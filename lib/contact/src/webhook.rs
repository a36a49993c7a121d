//! Delivery of submissions to an automation webhook.

use crate::error::ContactError;
use crate::form::ContactSubmission;
use crate::sink::ContactSink;
use async_trait::async_trait;
use rootcause::Report;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Posts each submission as JSON to a fixed URL.
///
/// Any 2xx status counts as delivered. There are no retries.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    /// Creates a sink. Without `timeout` a request may wait indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, Report<ContactError>> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ContactError::ClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContactSink for WebhookSink {
    #[instrument(skip(self, submission), fields(form = %submission.form, language = %submission.language))]
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), Report<ContactError>> {
        let response = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| ContactError::Transport {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "webhook returned error");
            return Err(ContactError::Rejected {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        debug!(status = %status, "contact submission delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ContactForm, FormTag};
    use chrono::Utc;
    use lichtpunt_core::Locale;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission() -> ContactSubmission {
        let mut form = ContactForm::new(FormTag::new("intro-offer"), Locale::En);
        form.name = "Anna".to_string();
        form.email = "anna@example.nl".to_string();
        form.message = "Hello".to_string();
        form.to_submission(Utc::now())
    }

    #[tokio::test]
    async fn posts_camel_case_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/contact"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "name": "Anna",
                "form": "intro-offer",
                "language": "en",
                "newsletter": false,
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sink = WebhookSink::new(format!("{}/hooks/contact", server.uri()), None)
            .expect("client builds");
        sink.deliver(&submission()).await.expect("delivered");
    }

    #[tokio::test]
    async fn accepts_any_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(server.uri(), None).expect("client builds");
        assert!(sink.deliver(&submission()).await.is_ok());
    }

    #[tokio::test]
    async fn server_error_is_rejected_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let sink = WebhookSink::new(server.uri(), None).expect("client builds");
        let report = sink.deliver(&submission()).await.expect_err("rejected");
        assert!(report.to_string().contains("status 500"));
    }

    #[tokio::test]
    async fn timeout_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(server.uri(), Some(Duration::from_millis(100)))
            .expect("client builds");
        let report = sink.deliver(&submission()).await.expect_err("timed out");
        assert!(report.to_string().contains("request to"));
    }
}
