use crate::domain::model::{FormData, SendEmailResponse};
use crate::domain::ports::{ConfigProvider, MailTransport};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://mail-smtp-backend.vercel.app";
pub const SEND_EMAIL_PATH: &str = "/send-email";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Talks to the mail backend over HTTP: `POST {base_url}/send-email`.
#[derive(Debug, Clone)]
pub struct HttpMailTransport {
    client: Client,
    endpoint: String,
}

impl HttpMailTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("base_url", base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContactError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SEND_EMAIL_PATH),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MailTransport for HttpMailTransport {
    async fn send(&self, form: &FormData) -> Result<SendEmailResponse> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(form).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<SendEmailResponse>(&body).map_err(|e| ContactError::Unknown {
                message: format!("Unexpected response from server: {}", e),
            })
        } else {
            // Error replies usually still carry `{ "message": ... }`.
            let message = serde_json::from_str::<SendEmailResponse>(&body)
                .ok()
                .and_then(|r| r.message);
            Err(ContactError::HttpStatus {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn form() -> FormData {
        FormData {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            student_id: "2222081036".to_string(),
            batch: "57A".to_string(),
            subject: "Exam".to_string(),
            message: "When?".to_string(),
        }
    }

    #[test]
    fn test_endpoint_normalises_trailing_slash() {
        let transport =
            HttpMailTransport::new("https://example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.endpoint(), "https://example.com/send-email");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(HttpMailTransport::new("mail-backend", Duration::from_secs(5)).is_err());
    }

    #[tokio::test]
    async fn test_posts_form_as_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send-email")
                .json_body(serde_json::json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "studentId": "2222081036",
                    "batch": "57A",
                    "subject": "Exam",
                    "message": "When?"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"success": true}));
        });

        let transport = HttpMailTransport::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let response = transport.send(&form()).await.unwrap();

        api_mock.assert();
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_error_status_carries_body_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send-email");
            then.status(400)
                .json_body(serde_json::json!({"success": false, "message": "All fields are required"}));
        });

        let transport = HttpMailTransport::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let err = transport.send(&form()).await.unwrap_err();

        assert!(matches!(err, ContactError::HttpStatus { status: 400, .. }));
        assert_eq!(err.user_message(), "All fields are required");
    }

    #[tokio::test]
    async fn test_error_status_without_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send-email");
            then.status(500);
        });

        let transport = HttpMailTransport::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let err = transport.send(&form()).await.unwrap_err();

        assert_eq!(err.user_message(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_unknown_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send-email");
            then.status(200).body("<html>ok</html>");
        });

        let transport = HttpMailTransport::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let err = transport.send(&form()).await.unwrap_err();

        assert!(matches!(err, ContactError::Unknown { .. }));
    }
}
