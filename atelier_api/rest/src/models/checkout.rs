use atelier_models::checkout::ProductId;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCheckoutRequest {
    #[serde(rename = "productId", default)]
    pub product_id: Option<ProductId>,
}

#[derive(Serialize)]
pub struct CheckoutSessionResponse {
    pub url: Url,
}
