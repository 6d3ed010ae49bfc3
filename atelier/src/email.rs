use atelier_config::EmailConfig;
use atelier_email_impl::{EmailServiceConfig, EmailServiceImpl};
use anyhow::Context;

/// Build the smtp client from the email config section
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(EmailServiceConfig {
        host: config.host.clone(),
        port: config.port,
        user: config.user.clone(),
        password: config.password.clone(),
        tls_strict: config.tls_strict,
        from: config.from.clone(),
    })
    .context("Failed to create smtp client")
}
