use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use atelier_core_health_contracts::{HealthService, HealthStatus};
use atelier_email_contracts::EmailService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
    config: HealthServiceConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email, config: HealthServiceConfig) -> Self {
        Self {
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let status = HealthStatus { email };
        *cache_guard = Some(CachedStatus {
            status,
            timestamp: Instant::now(),
        });

        status
    }
}

#[cfg(test)]
mod tests {
    use atelier_email_contracts::MockEmailService;

    use super::*;

    #[tokio::test]
    async fn ok() {
        let email = MockEmailService::new().with_ping(Ok(()));

        let sut = HealthServiceImpl::new(
            email,
            HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
        );

        let status = sut.get_status().await;

        assert_eq!(status, HealthStatus { email: true });
    }

    #[tokio::test]
    async fn smtp_unreachable() {
        let email = MockEmailService::new().with_ping(Err(anyhow::anyhow!("connection refused")));

        let sut = HealthServiceImpl::new(
            email,
            HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
        );

        let status = sut.get_status().await;

        assert_eq!(status, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn status_is_cached() {
        // with_ping expects exactly one call; the second request must be
        // served from the cache
        let email = MockEmailService::new().with_ping(Ok(()));

        let sut = HealthServiceImpl::new(
            email,
            HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
        );

        assert_eq!(sut.get_status().await, HealthStatus { email: true });
        assert_eq!(sut.get_status().await, HealthStatus { email: true });
    }
}
