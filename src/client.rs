//! HTTP client used by the inquiry form to reach the contact endpoint.

use std::time::Duration;

use riviera_inquiry::{InquiryClient, InquiryRequest};

pub const CONTACT_PATH: &str = "/api/contact";

pub struct HttpInquiryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpInquiryClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl InquiryClient for HttpInquiryClient {
    async fn post_inquiry(&self, request: &InquiryRequest) -> anyhow::Result<u16> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        Ok(response.status().as_u16())
    }
}
