//! Email delivery over SMTP using lettre

use std::time::Duration;

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use riviera_inquiry::{MailTransport, OutgoingEmail, TransportError};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    /// Mailbox that receives property inquiries.
    pub contact_address: String,
    pub timeout_secs: u64,
}

/// SMTP-backed [`MailTransport`]
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
    timeout: Duration,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(timeout))
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            // 465 expects TLS from the first byte, submission ports upgrade via STARTTLS
            let builder = if config.smtp_port == 465 {
                SmtpTransport::relay(&config.smtp_host)?
            } else {
                SmtpTransport::starttls_relay(&config.smtp_host)?
            };

            builder
                .port(config.smtp_port)
                .credentials(creds)
                .timeout(Some(timeout))
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
            timeout,
        })
    }

    /// Build the MIME message for an outgoing email. An unparseable
    /// reply-to address is dropped rather than failing the send.
    pub fn build_message(&self, email: &OutgoingEmail) -> Result<Message, TransportError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| TransportError::new(format!("invalid recipient: {e}")))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str());

        if let Some(reply_to) = &email.reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => tracing::warn!(error = %e, "Skipping unparseable reply-to address"),
            }
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                email.plain.clone(),
                email.html.clone(),
            ))
            .map_err(|e| TransportError::new(format!("failed to build message: {e}")))
    }
}

#[async_trait::async_trait]
impl MailTransport for EmailService {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: OutgoingEmail) -> Result<(), TransportError> {
        let message = self.build_message(&email)?;
        let mailer = self.mailer.clone();

        tracing::info!("Sending email");

        // The deadline bounds the whole exchange. A send abandoned here keeps
        // running on the blocking pool until lettre's per-command socket
        // timeout ends it, and the relay may still accept the message.
        let task = tokio::task::spawn_blocking(move || mailer.send(&message));

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(Ok(_))) => Ok(()),
            Ok(Ok(Err(e))) => {
                tracing::error!(error = %e, "Failed to send email via SMTP");
                Err(TransportError::new(format!("SMTP error: {e}")))
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "SMTP send task failed");
                Err(TransportError::new(format!("send task failed: {e}")))
            }
            Err(_) => {
                tracing::error!(timeout = ?self.timeout, "SMTP send timed out");
                Err(TransportError::new("SMTP send timed out"))
            }
        }
    }
}
