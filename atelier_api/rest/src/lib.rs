use std::net::IpAddr;

use atelier_core_checkout_contracts::CheckoutService;
use atelier_core_contact_contracts::ContactService;
use atelier_core_health_contracts::HealthService;
use axum::Router;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Checkout> {
    health: Health,
    contact: Contact,
    checkout: Checkout,
}

impl<Health, Contact, Checkout> RestServer<Health, Contact, Checkout>
where
    Health: HealthService,
    Contact: ContactService,
    Checkout: CheckoutService,
{
    pub fn new(health: Health, contact: Contact, checkout: Checkout) -> Self {
        Self {
            health,
            contact,
            checkout,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::checkout::router(self.checkout.into()));

        // request_id must wrap trace so the span can read the extension
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}
