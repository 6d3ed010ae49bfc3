use atelier_email_contracts::{Email, EmailSendError, EmailService};
use atelier_models::email_address::EmailAddressWithName;
use atelier_utils::Apply;
use anyhow::anyhow;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    transport::smtp::{
        self,
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Whether to verify the smtp server's certificate. Disabled only for
    /// local development against self-signed setups.
    pub tls_strict: bool,
    pub from: EmailAddressWithName,
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        let tls = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(!config.tls_strict)
            .build()?;

        // implicit TLS submission (port 465)
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .tls(Tls::Wrapper(tls))
            .credentials(Credentials::new(config.user, config.password))
            .build();

        Ok(Self {
            from: config.from,
            transport,
        })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to, |builder, reply_to| {
                MessageBuilder::reply_to(builder, reply_to.0)
            })
            .subject(email.subject);

        match email.html_body {
            Some(html) => builder
                .multipart(MultiPart::alternative_plain_html(email.text_body, html)),
            None => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(email.text_body),
        }
        .map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<bool, EmailSendError> {
        let message = self.build_message(email).map_err(EmailSendError::Other)?;

        match self.transport.send(message).await {
            Ok(response) => Ok(response.is_positive()),
            Err(err) if is_auth_failure(&err) => Err(EmailSendError::Auth),
            Err(err) => Err(EmailSendError::Other(err.into())),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

/// Authentication failure replies per RFC 4954.
fn is_auth_failure(err: &smtp::Error) -> bool {
    err.status()
        .is_some_and(|code| matches!(code.to_string().as_str(), "530" | "534" | "535"))
}
