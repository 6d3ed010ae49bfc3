use std::future::Future;

use atelier_models::checkout::CheckoutRequest;
use thiserror::Error;
use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CheckoutService: Send + Sync + 'static {
    /// Create a hosted checkout session for the requested product tier and
    /// return the redirect URL the browser should follow.
    fn create_session(
        &self,
        request: CheckoutRequest,
    ) -> impl Future<Output = Result<Url, CheckoutCreateSessionError>> + Send;
}

#[derive(Debug, Error)]
pub enum CheckoutCreateSessionError {
    #[error("Product ID is required")]
    MissingProductId,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockCheckoutService {
    pub fn with_create_session(
        mut self,
        request: CheckoutRequest,
        result: Result<Url, CheckoutCreateSessionError>,
    ) -> Self {
        self.expect_create_session()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
