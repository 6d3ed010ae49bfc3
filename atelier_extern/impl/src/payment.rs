use std::sync::Arc;

use atelier_extern_contracts::payment::{
    CheckoutSession, CheckoutSessionRequest, PaymentApiService,
};
use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

use crate::http::HttpClient;

/// https://docs.stripe.com/api/checkout/sessions/create
const CHECKOUT_SESSIONS_ENDPOINT: &str = "https://api.stripe.com/v1/checkout/sessions";

#[derive(Debug, Clone)]
pub struct PaymentApiServiceImpl {
    config: PaymentApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct PaymentApiServiceConfig {
    secret_key: Arc<str>,
    checkout_endpoint: Arc<Url>,
}

impl PaymentApiServiceConfig {
    pub fn new(secret_key: String, checkout_endpoint_override: Option<Url>) -> Self {
        Self {
            secret_key: secret_key.into(),
            checkout_endpoint: checkout_endpoint_override
                .unwrap_or_else(|| CHECKOUT_SESSIONS_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl PaymentApiServiceImpl {
    pub fn new(config: PaymentApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl PaymentApiService for PaymentApiServiceImpl {
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> anyhow::Result<CheckoutSession> {
        let params: Vec<(&str, String)> = vec![
            ("mode", "payment".into()),
            ("payment_method_types[0]", "card".into()),
            (
                "line_items[0][price_data][currency]",
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][product]",
                request.product_id.into_inner(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                request.unit_amount.into_inner().to_string(),
            ),
            ("line_items[0][quantity]", request.quantity.to_string()),
            ("success_url", request.success_url.to_string()),
            ("cancel_url", request.cancel_url.to_string()),
        ];

        let response = self
            .client
            .post((*self.config.checkout_endpoint).clone())
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await
            .context("Failed to send checkout session request")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<CreateSessionErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.to_string());
            bail!("Checkout session request failed: {detail}");
        }

        let session = response
            .json::<CreateSessionResponse>()
            .await
            .context("Failed to deserialize checkout session response")?;

        Ok(CheckoutSession {
            id: session.id,
            url: session
                .url
                .context("Checkout session has no redirect URL")?,
        })
    }
}

#[derive(Deserialize)]
struct CreateSessionResponse {
    id: String,
    url: Option<Url>,
}

#[derive(Deserialize)]
struct CreateSessionErrorResponse {
    error: CreateSessionError,
}

#[derive(Deserialize)]
struct CreateSessionError {
    message: Option<String>,
}
