use atelier_config::Config;
use atelier_email_contracts::{Email, EmailService};
use atelier_models::email_address::EmailAddressWithName;
use anyhow::ensure;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = crate::email::connect(&config.email)?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            reply_to: None,
            text_body: "Email deliverability seems to be working!".into(),
            html_body: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
