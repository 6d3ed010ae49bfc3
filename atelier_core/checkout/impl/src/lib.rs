use std::sync::Arc;

use atelier_core_checkout_contracts::{CheckoutCreateSessionError, CheckoutService};
use atelier_extern_contracts::payment::{CheckoutSessionRequest, PaymentApiService};
use atelier_models::checkout::{CheckoutRequest, ProductCatalog};
use anyhow::Context;
use url::Url;

#[derive(Debug, Clone)]
pub struct CheckoutServiceImpl<PaymentApi> {
    payment_api: PaymentApi,
    config: CheckoutServiceConfig,
}

#[derive(Debug, Clone)]
pub struct CheckoutServiceConfig {
    pub catalog: Arc<ProductCatalog>,
    pub currency: String,
    /// Origin used for the redirect URLs when the request does not carry
    /// one (direct API calls, local development).
    pub fallback_origin: Arc<Url>,
}

impl<PaymentApi> CheckoutServiceImpl<PaymentApi> {
    pub fn new(payment_api: PaymentApi, config: CheckoutServiceConfig) -> Self {
        Self {
            payment_api,
            config,
        }
    }
}

impl<PaymentApi> CheckoutService for CheckoutServiceImpl<PaymentApi>
where
    PaymentApi: PaymentApiService,
{
    async fn create_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<Url, CheckoutCreateSessionError> {
        let product_id = request
            .product_id
            .filter(|id| !id.is_empty())
            .ok_or(CheckoutCreateSessionError::MissingProductId)?;

        // Unknown ids deliberately resolve to the catalog default instead of
        // failing the request.
        let unit_amount = self.config.catalog.unit_amount(&product_id);

        let origin = request
            .origin
            .unwrap_or_else(|| (*self.config.fallback_origin).clone());
        let success_url = origin
            .join("/success?session_id={CHECKOUT_SESSION_ID}")
            .context("Failed to build success URL")?;
        let cancel_url = origin
            .join("/pricing")
            .context("Failed to build cancel URL")?;

        let session = self
            .payment_api
            .create_checkout_session(CheckoutSessionRequest {
                product_id,
                currency: self.config.currency.clone(),
                unit_amount,
                quantity: 1,
                success_url,
                cancel_url,
            })
            .await?;

        Ok(session.url)
    }
}
