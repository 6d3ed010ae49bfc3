use std::future::Future;

use atelier_models::checkout::{ProductId, UnitAmount};
use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PaymentApiService: Send + Sync + 'static {
    /// Create a hosted one-time-payment checkout session. Every call creates
    /// a fresh session; there is no deduplication.
    fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> impl Future<Output = anyhow::Result<CheckoutSession>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionRequest {
    pub product_id: ProductId,
    pub currency: String,
    pub unit_amount: UnitAmount,
    pub quantity: u32,
    pub success_url: Url,
    pub cancel_url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted payment page the browser is redirected to.
    pub url: Url,
}

#[cfg(feature = "mock")]
impl MockPaymentApiService {
    pub fn with_create_checkout_session(
        mut self,
        request: CheckoutSessionRequest,
        result: anyhow::Result<CheckoutSession>,
    ) -> Self {
        self.expect_create_checkout_session()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
