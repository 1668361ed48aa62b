use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::RelayError;
use crate::settings::RelaySettings;

/// One outbound message for the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Form values keyed by field name.
    pub fields: BTreeMap<String, String>,
}

impl RelayRequest {
    pub fn new(settings: &RelaySettings, fields: BTreeMap<String, String>) -> Self {
        Self {
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.public_key.clone(),
            fields,
        }
    }
}

/// Delivers the contact form as an email. Only success/failure matters.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, request: RelayRequest) -> Result<(), RelayError>;
}

/// EmailJS REST payload.
#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

/// Relay backed by the EmailJS `email/send` endpoint.
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, request: RelayRequest) -> Result<(), RelayError> {
        let payload = EmailJsPayload {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.fields,
        };

        tracing::debug!("Posting contact form to {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&payload).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Contact message accepted by relay");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status: status.as_u16(), body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn request() -> RelayRequest {
        let fields = [("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let settings = RelaySettings {
            endpoint: String::new(),
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
        };
        RelayRequest::new(&settings, fields)
    }

    #[tokio::test]
    async fn test_send_posts_emailjs_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body(serde_json::json!({
                    "service_id": "svc",
                    "template_id": "tpl",
                    "user_id": "pk",
                    "template_params": {
                        "email": "ada@example.com",
                        "message": "Hi",
                        "name": "Ada"
                    }
                }));
            then.status(200).body("OK");
        });

        let relay = EmailJsRelay::new(server.url("/api/v1.0/email/send"));
        assert!(relay.send(request()).await.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn test_send_maps_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(400).body("The Public Key is invalid");
        });

        let relay = EmailJsRelay::new(server.url("/send"));
        let err = relay.send(request()).await.unwrap_err();
        assert_eq!(
            err,
            RelayError::Rejected { status: 400, body: "The Public Key is invalid".into() }
        );
    }

    #[tokio::test]
    async fn test_send_maps_transport_failure() {
        // Nothing listens on port 9 of localhost.
        let relay = EmailJsRelay::new("http://127.0.0.1:9/send");
        assert!(matches!(relay.send(request()).await, Err(RelayError::Transport(_))));
    }
}
