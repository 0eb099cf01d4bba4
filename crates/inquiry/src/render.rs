use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{InquiryField, InquiryRequest};

/// Branding applied to the inquiry email. Loaded from configuration so the
/// same renderer serves every site theme.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EmailTheme {
    pub brand_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub website_url: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub header_color: String,
    pub accent_color: String,
}

impl Default for EmailTheme {
    fn default() -> Self {
        Self {
            brand_name: "Riviera Stays".to_owned(),
            tagline: "A potential client is interested in Riviera Stays properties".to_owned(),
            logo_url: "https://riviera-stays.com/logo-white.png".to_owned(),
            website_url: "https://riviera-stays.com".to_owned(),
            contact_email: "info@riviera-stays.com".to_owned(),
            phone: "+377 643 917 618".to_owned(),
            address: "7 avenue des Papalins, 98000 Monaco".to_owned(),
            header_color: "#1a1a1a".to_owned(),
            accent_color: "#5e81ac".to_owned(),
        }
    }
}

impl EmailTheme {
    pub fn subject(&self) -> String {
        format!("New Property Inquiry from {}", self.brand_name)
    }
}

/// Subject, HTML and plain-text bodies of one inquiry email.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedInquiry {
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Formats an ISO-like date (`2025-06-01` or `2025-06-01T10:00:00Z`) as
/// `Sunday, June 1, 2025`. Returns `None` when no calendar date can be read.
pub fn format_long_date(raw: &str) -> Option<String> {
    let date = Date::parse(raw.trim().get(..10)?, format_description!("[year]-[month]-[day]"))
        .ok()?;

    Some(format!(
        "{}, {} {}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        date.year()
    ))
}

fn display_date(raw: &str) -> String {
    format_long_date(raw).unwrap_or_else(|| {
        tracing::debug!(value = raw, "Unparseable stay date, keeping raw value");
        raw.to_owned()
    })
}

fn reply_href(request: &InquiryRequest, theme: &EmailTheme) -> String {
    let subject = format!("Re: Your {} Inquiry", theme.brand_name);
    let body = format!(
        "Dear {},\r\n\r\nThank you for your interest in {} properties.\r\n\r\n",
        request.name, theme.brand_name
    );

    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(&request.email).replace("%40", "@"),
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(askama::Template)]
#[template(path = "inquiry.html")]
struct InquiryHtmlTemplate<'a> {
    theme: &'a EmailTheme,
    details: InquiryDetails<'a>,
    reply_href: String,
    year: i32,
}

#[derive(askama::Template)]
#[template(path = "inquiry.txt")]
struct InquiryPlainTemplate<'a> {
    theme: &'a EmailTheme,
    details: InquiryDetails<'a>,
    year: i32,
}

#[derive(Clone)]
struct InquiryDetails<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    property_interest: Option<&'a str>,
    guests: Option<&'a str>,
    check_in: Option<String>,
    check_out: Option<String>,
    message: Option<&'a str>,
}

impl<'a> InquiryDetails<'a> {
    fn new(request: &'a InquiryRequest) -> Self {
        Self {
            name: &request.name,
            email: &request.email,
            phone: request.optional(InquiryField::Phone),
            property_interest: request.optional(InquiryField::PropertyInterest),
            guests: request.optional(InquiryField::Guests),
            check_in: request.optional(InquiryField::CheckIn).map(display_date),
            check_out: request.optional(InquiryField::CheckOut).map(display_date),
            message: request.optional(InquiryField::Message),
        }
    }

    fn has_travel_details(&self) -> bool {
        self.guests.is_some() || self.has_dates()
    }

    fn has_dates(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }
}

/// Renders the notification sent to the brokerage for one inquiry.
///
/// Every interpolated value goes through askama's HTML escaping; empty
/// optional fields produce no block at all. `year` feeds the copyright line.
pub fn render_inquiry(
    request: &InquiryRequest,
    theme: &EmailTheme,
    year: i32,
) -> Result<RenderedInquiry, askama::Error> {
    use askama::Template;

    let details = InquiryDetails::new(request);

    let html = InquiryHtmlTemplate {
        theme,
        details: details.clone(),
        reply_href: reply_href(request, theme),
        year,
    }
    .render()?;

    let plain = InquiryPlainTemplate {
        theme,
        details,
        year,
    }
    .render()?;

    Ok(RenderedInquiry {
        subject: theme.subject(),
        html,
        plain,
    })
}
