use std::time::Duration;

use anyhow::Result;
use clap::Args;
use riviera::{Config, client::HttpInquiryClient};
use riviera_inquiry::{InquiryField, InquiryForm, SubmissionState};

#[derive(Args)]
pub struct InquireArgs {
    /// Base URL of the server (defaults to the configured host and port)
    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    message: Option<String>,

    /// Property or location of interest
    #[arg(long)]
    property: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    check_out: Option<String>,

    /// Party size bucket, e.g. 1-2, 3-4, 7+
    #[arg(long)]
    guests: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

pub async fn inquire(config: Config, args: InquireArgs) -> Result<()> {
    let base_url = args
        .url
        .unwrap_or_else(|| format!("http://{}:{}", config.server.host, config.server.port));

    let client = HttpInquiryClient::new(&base_url, Duration::from_secs(args.timeout))?;
    tracing::info!(endpoint = client.endpoint(), "Submitting inquiry");

    let form = InquiryForm::new(client);

    for (field, value) in [
        (InquiryField::Name, Some(args.name)),
        (InquiryField::Email, Some(args.email)),
        (InquiryField::Phone, args.phone),
        (InquiryField::Message, args.message),
        (InquiryField::PropertyInterest, args.property),
        (InquiryField::CheckIn, args.check_in),
        (InquiryField::CheckOut, args.check_out),
        (InquiryField::Guests, args.guests),
    ] {
        if let Some(value) = value {
            form.on_field_change(field, value);
        }
    }

    match form.submit().await? {
        SubmissionState::Succeeded => {
            tracing::info!("Inquiry sent");
            Ok(())
        }
        state => anyhow::bail!("inquiry could not be sent ({state:?})"),
    }
}
