//! Transport and client doubles shared by the inquiry tests.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use riviera_inquiry::{
    InquiryClient, InquiryRequest, MailTransport, OutgoingEmail, TransportError,
};
use tokio::sync::Notify;

pub const RECIPIENT: &str = "bookings@riviera-stays.test";

/// Keeps every email it is asked to send.
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

/// Rejects every send, counting the attempts.
#[derive(Default)]
pub struct RejectingTransport {
    pub attempts: AtomicUsize,
}

#[async_trait::async_trait]
impl MailTransport for RejectingTransport {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::new(
            "535 5.7.8 Username and Password not accepted (user=secret@relay)",
        ))
    }
}

pub enum Reply {
    Status(u16),
    NetworkError,
}

/// Answers with a fixed reply, optionally waiting on a gate first.
pub struct StubClient {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    pub calls: Arc<AtomicUsize>,
    pub last_request: Arc<Mutex<Option<InquiryRequest>>>,
}

impl StubClient {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            gate: None,
            calls: Arc::default(),
            last_request: Arc::default(),
        }
    }

    pub fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(reply)
        }
    }
}

#[async_trait::async_trait]
impl InquiryClient for StubClient {
    async fn post_inquiry(&self, request: &InquiryRequest) -> anyhow::Result<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.reply {
            Reply::Status(status) => Ok(status),
            Reply::NetworkError => Err(anyhow::anyhow!("connection refused")),
        }
    }
}
