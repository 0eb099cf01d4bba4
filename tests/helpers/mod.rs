//! Test helpers for driving the router without a network or SMTP relay.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use riviera::{AppState, Config};
use riviera_inquiry::{
    DeliveryService, EmailTheme, MailTransport, OutgoingEmail, TransportError,
};
use riviera_notification::EmailConfig;
use tower::ServiceExt;

pub const RECIPIENT: &str = "bookings@riviera-stays.test";

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Fails like a relay refusing our credentials.
pub struct RejectingTransport;

#[async_trait::async_trait]
impl MailTransport for RejectingTransport {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), TransportError> {
        Err(TransportError::new(
            "535 5.7.8 Username and Password not accepted for smtp-user@example.com",
        ))
    }
}

pub fn test_config() -> Config {
    Config {
        server: riviera::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            body_limit: 64 * 1024,
        },
        email: EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "noreply@riviera-stays.test".to_string(),
            contact_address: RECIPIENT.to_string(),
            timeout_secs: 5,
        },
        theme: EmailTheme::default(),
        observability: riviera::config::ObservabilityConfig::default(),
    }
}

pub fn app(transport: Arc<dyn MailTransport>) -> Router {
    let config = test_config();
    let delivery = DeliveryService::new(transport, RECIPIENT, config.theme.clone());

    riviera::router(AppState { config, delivery })
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
