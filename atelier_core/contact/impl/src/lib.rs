use std::sync::Arc;

use atelier_core_contact_contracts::{ContactSendMessageError, ContactService};
use atelier_email_contracts::{Email, EmailSendError, EmailService};
use atelier_models::{contact::ContactSubmission, email_address::EmailAddress};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Operator address; both the fixed sender identity and the recipient
    /// of relayed submissions. Replies go to the visitor via `Reply-To`.
    pub email: Arc<EmailAddress>,
}

impl<EmailS> ContactServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let email = Email {
            recipient: (*self.config.email).clone().into(),
            subject: format!("New Contact Form Submission - {}", *submission.name),
            reply_to: Some(submission.email.clone().into()),
            text_body: text_body(&submission),
            html_body: Some(html_body(&submission)),
        };

        match self.email.send(email).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ContactSendMessageError::Send),
            Err(EmailSendError::Auth) => Err(ContactSendMessageError::Configuration),
            Err(EmailSendError::Other(err)) => Err(ContactSendMessageError::Other(err)),
        }
    }
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form Submission\n\nName: {}\nEmail: {}\n\nMessage:\n{}",
        *submission.name, submission.email, *submission.message
    )
}

fn html_body(submission: &ContactSubmission) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\
         <p><strong>Message:</strong></p>\
         <div>{message}</div>\
         </div>",
        name = *submission.name,
        email = submission.email,
        message = sanitize_message(&submission.message),
    )
}

/// Escape angle brackets and convert newlines so the visitor's message can
/// never inject markup into the rendered email body. The plain text variant
/// keeps the raw message.
fn sanitize_message(message: &str) -> String {
    message
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br>")
}
