//! Inquiry delivery: validate, render, hand off to the mail transport.

use std::sync::Arc;

use thiserror::Error;
use time::OffsetDateTime;
use validator::{Validate, ValidationErrors};

use crate::{EmailTheme, InquiryField, InquiryRequest, render_inquiry};

/// A fully composed email ready for the outbound relay. The sender is owned
/// by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Failure reported by a mail transport. The message is meant for logs only.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outbound mail capability injected into [`DeliveryService`].
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), TransportError>;
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Missing required fields: {0}")]
    MissingRequiredField(#[from] ValidationErrors),

    #[error("Mail transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to render inquiry email: {0}")]
    Render(#[from] askama::Error),
}

/// `Ok(())` once the email has been accepted by the transport.
pub type DeliveryOutcome = Result<(), DeliveryError>;

/// Turns inquiries into emails addressed to the brokerage.
///
/// Holds no per-request state; clones share the same transport.
#[derive(Clone)]
pub struct DeliveryService {
    transport: Arc<dyn MailTransport>,
    recipient: String,
    theme: EmailTheme,
}

impl DeliveryService {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        recipient: impl Into<String>,
        theme: EmailTheme,
    ) -> Self {
        Self {
            transport,
            recipient: recipient.into(),
            theme,
        }
    }

    pub fn theme(&self) -> &EmailTheme {
        &self.theme
    }

    #[tracing::instrument(
        skip_all,
        fields(
            property = %request.property_interest,
            has_dates = request.optional(InquiryField::CheckIn).is_some()
        )
    )]
    pub async fn deliver(&self, request: &InquiryRequest) -> DeliveryOutcome {
        if let Err(errors) = request.validate() {
            tracing::warn!(error = %errors, "Rejected inquiry with missing required fields");
            return Err(errors.into());
        }

        let rendered = render_inquiry(request, &self.theme, OffsetDateTime::now_utc().year())?;

        self.transport
            .send(OutgoingEmail {
                to: self.recipient.to_owned(),
                reply_to: Some(request.email.to_owned()),
                subject: rendered.subject,
                html: rendered.html,
                plain: rendered.plain,
            })
            .await?;

        tracing::info!("Inquiry delivered");

        Ok(())
    }
}
