use atelier_models::contact::ContactSubmission;
use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::{ContactGateway, ContactSubmitError};

/// [`ContactGateway`] posting to the backend's contact endpoint.
#[derive(Debug, Clone)]
pub struct HttpContactGateway {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpContactGateway {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: base_url
                .join("/contact")
                .context("Failed to build contact endpoint URL")?,
            client: reqwest::Client::new(),
        })
    }
}

impl ContactGateway for HttpContactGateway {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&submission)
            .send()
            .await
            .context("Failed to send contact request")?;

        if response.status().is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error)
            .unwrap_or_else(|| "Failed to send message".into());
        Err(ContactSubmitError::Rejected(message))
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}
