use std::future::Future;

use atelier_models::email_address::EmailAddressWithName;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Send an email. Returns whether the smtp server accepted the message.
    fn send(&self, email: Email) -> impl Future<Output = Result<bool, EmailSendError>> + Send;

    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub reply_to: Option<EmailAddressWithName>,
    pub text_body: String,
    /// Optional HTML variant. When present the message is sent as
    /// multipart/alternative with the text body as fallback.
    pub html_body: Option<String>,
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    /// The smtp server rejected our credentials. Callers must not surface
    /// any detail of this to end users.
    #[error("Smtp authentication failed")]
    Auth,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, email: Email, err: EmailSendError) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Err(err))));
        self
    }

    pub fn with_ping(mut self, result: anyhow::Result<()>) -> Self {
        self.expect_ping()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
