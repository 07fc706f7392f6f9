//! Web3Forms client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;

use super::error::ContactError;
use super::message::{ContactMessage, SubmitPayload};

/// Default submission endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Default email subject for submissions.
const DEFAULT_SUBJECT: &str = "New Contact Form Submission - JourneyJunction";

/// Response body returned by the form service.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Configuration for the contact client.
#[derive(Debug, Clone)]
pub struct ContactClientConfig {
    /// Web3Forms access key
    pub access_key: String,
    /// Submission URL
    pub endpoint: String,
    /// Subject line attached to every message
    pub subject: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ContactClientConfig {
    /// Create a new config with the given access key.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            timeout_secs: 15,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client that forwards contact messages to the form service.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    config: ContactClientConfig,
}

impl ContactClient {
    /// Create a new client.
    pub fn new(config: ContactClientConfig) -> Result<Self, ContactError> {
        if config.access_key.trim().is_empty() {
            return Err(ContactError::NotConfigured);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Validate and submit a message.
    ///
    /// Honeypot submissions are accepted without being forwarded.
    pub async fn submit(&self, msg: &ContactMessage) -> Result<(), ContactError> {
        msg.validate()?;

        if msg.is_spam() {
            tracing::info!("dropping contact submission with honeypot set");
            return Ok(());
        }

        let payload = SubmitPayload::new(&self.config.access_key, &self.config.subject, msg);

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Map a form-service response to success or an error.
fn interpret_response(status: u16, body: &str) -> Result<(), ContactError> {
    let parsed: Result<SubmitResponse, _> = serde_json::from_str(body);

    if !(200..300).contains(&status) {
        let message = match parsed {
            Ok(r) if !r.message.is_empty() => r.message,
            _ => body.chars().take(500).collect(),
        };
        return Err(ContactError::Api { status, message });
    }

    let response = parsed.map_err(|e| ContactError::Json {
        message: e.to_string(),
    })?;

    if response.success {
        Ok(())
    } else {
        Err(ContactError::Rejected(response.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::mock::MockFormService;
    use axum::http::StatusCode;

    #[test]
    fn config_defaults() {
        let config = ContactClientConfig::new("key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.subject, DEFAULT_SUBJECT);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn config_overrides() {
        let config = ContactClientConfig::new("key")
            .with_endpoint("http://localhost:9999/submit")
            .with_timeout(3);
        assert_eq!(config.endpoint, "http://localhost:9999/submit");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn empty_key_is_not_configured() {
        let err = ContactClient::new(ContactClientConfig::new("  ")).unwrap_err();
        assert!(matches!(err, ContactError::NotConfigured));
    }

    #[test]
    fn success_response() {
        let body = r#"{"success":true,"message":"Email sent successfully!"}"#;
        assert!(interpret_response(200, body).is_ok());
    }

    #[test]
    fn unsuccessful_response() {
        let body = r#"{"success":false,"message":"Invalid access key"}"#;
        match interpret_response(200, body) {
            Err(ContactError::Rejected(msg)) => assert_eq!(msg, "Invalid access key"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn error_status_uses_service_message() {
        let body = r#"{"success":false,"message":"Too many requests"}"#;
        match interpret_response(429, body) {
            Err(ContactError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Too many requests");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn error_status_with_html_body() {
        match interpret_response(502, "<html>Bad Gateway</html>") {
            Err(ContactError::Api { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>Bad Gateway</html>");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body() {
        assert!(matches!(
            interpret_response(200, "not json"),
            Err(ContactError::Json { .. })
        ));
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "  Asha ".into(),
            email: "asha@example.com".into(),
            phone: "98765 43210".into(),
            message: "Is Kedarnath open in May?\n".into(),
            ..ContactMessage::default()
        }
    }

    #[tokio::test]
    async fn submit_posts_payload() {
        let service = MockFormService::accepting().await;
        let client = ContactClient::new(service.config("key-123")).unwrap();

        client.submit(&message()).await.unwrap();

        let received = service.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            serde_json::json!({
                "access_key": "key-123",
                "subject": DEFAULT_SUBJECT,
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "98765 43210",
                "message": "Is Kedarnath open in May?",
            })
        );
    }

    #[tokio::test]
    async fn submit_upstream_error() {
        let service = MockFormService::start(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"success":false,"message":"Server exploded"}"#,
        )
        .await;
        let client = ContactClient::new(service.config("key")).unwrap();

        match client.submit(&message()).await {
            Err(ContactError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server exploded");
            }
            other => panic!("expected Api, got {other:?}"),
        }
        assert_eq!(service.received().await.len(), 1);
    }

    #[tokio::test]
    async fn submit_rejected() {
        let service = MockFormService::start(
            StatusCode::OK,
            r#"{"success":false,"message":"Invalid access key"}"#,
        )
        .await;
        let client = ContactClient::new(service.config("wrong")).unwrap();

        assert!(matches!(
            client.submit(&message()).await,
            Err(ContactError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn invalid_message_is_not_sent() {
        // Unroutable endpoint: validation must fail before any request is made.
        let client = ContactClient::new(
            ContactClientConfig::new("key").with_endpoint("http://127.0.0.1:9/submit"),
        )
        .unwrap();
        let msg = ContactMessage {
            name: "Asha".into(),
            email: "not-an-email".into(),
            message: "hi".into(),
            ..ContactMessage::default()
        };
        assert!(matches!(
            client.submit(&msg).await,
            Err(ContactError::Invalid { field: "email", .. })
        ));
    }

    #[tokio::test]
    async fn honeypot_is_not_sent() {
        let client = ContactClient::new(
            ContactClientConfig::new("key").with_endpoint("http://127.0.0.1:9/submit"),
        )
        .unwrap();
        let msg = ContactMessage {
            name: "Bot".into(),
            email: "bot@example.com".into(),
            message: "buy now".into(),
            botcheck: Some("on".into()),
            ..ContactMessage::default()
        };
        assert!(client.submit(&msg).await.is_ok());
    }
}
