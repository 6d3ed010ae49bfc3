use std::sync::Arc;

use atelier_api_rest::RestServer;
use atelier_config::Config;
use atelier_core_checkout_impl::{CheckoutServiceConfig, CheckoutServiceImpl};
use atelier_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use atelier_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use atelier_email_contracts::EmailService;
use atelier_extern_impl::payment::{PaymentApiServiceConfig, PaymentApiServiceImpl};
use atelier_models::checkout::ProductCatalog;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let payment_api = PaymentApiServiceImpl::new(PaymentApiServiceConfig::new(
        config.payment.secret_key.clone(),
        config.payment.checkout_endpoint_override.clone(),
    ));

    let health = HealthServiceImpl::new(
        email.clone(),
        HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );
    let contact = ContactServiceImpl::new(
        email.clone(),
        ContactServiceConfig {
            email: Arc::new(config.contact.email.clone()),
        },
    );
    let checkout = CheckoutServiceImpl::new(
        payment_api,
        CheckoutServiceConfig {
            catalog: Arc::new(ProductCatalog::default()),
            currency: config.checkout.currency.clone(),
            fallback_origin: Arc::new(config.checkout.fallback_origin.clone()),
        },
    );

    let server = RestServer::new(health, contact, checkout);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
