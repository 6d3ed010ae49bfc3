use nutype::nutype;
use serde::Serialize;
use thiserror::Error;

use crate::email_address::EmailAddress;

/// A fully validated contact form submission. Instances only exist for
/// payloads that passed [`ContactFields::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: EmailAddress,
    pub message: MessageContent,
}

#[nutype(
    validate(len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmitterName(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 1000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct MessageContent(String);

/// Raw, untrusted form fields as they arrive from the browser.
///
/// Validation is fail-fast in schema order (name, email, message) and both
/// the REST handler and the client form controller go through this exact
/// function, so the two sides cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(self) -> Result<ContactSubmission, ContactValidateError> {
        let name = SubmitterName::try_from(self.name)
            .map_err(|_| ContactValidateError::NameTooLong)?;

        let email = self
            .email
            .parse::<EmailAddress>()
            .map_err(|_| ContactValidateError::EmailInvalid)?;
        if self.email.chars().count() > 100 {
            return Err(ContactValidateError::EmailTooLong);
        }

        let message = MessageContent::try_from(self.message).map_err(|err| match err {
            MessageContentError::LenCharMinViolated => ContactValidateError::MessageTooShort,
            MessageContentError::LenCharMaxViolated => ContactValidateError::MessageTooLong,
        })?;

        Ok(ContactSubmission {
            name,
            email,
            message,
        })
    }
}

/// First failing rule of a submission. The `Display` impls are user-facing
/// and returned verbatim by the contact endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidateError {
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Email must be less than 100 characters")]
    EmailTooLong,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message must be less than 1000 characters")]
    MessageTooLong,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "Please build me a ten-page site for my bakery.".into(),
        }
    }

    #[test]
    fn valid() {
        let submission = fields().validate().unwrap();
        assert_eq!(*submission.name, "Jane");
        assert_eq!(submission.email.as_str(), "jane@x.com");
        assert_eq!(
            *submission.message,
            "Please build me a ten-page site for my bakery."
        );
    }

    #[test]
    fn name_at_limit() {
        let mut fields = fields();
        fields.name = "x".repeat(100);
        fields.validate().unwrap();
    }

    #[test]
    fn name_too_long() {
        let mut fields = fields();
        fields.name = "x".repeat(101);
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::NameTooLong
        );
    }

    #[test]
    fn empty_name_is_allowed() {
        // no minimum length rule on the name
        let mut fields = fields();
        fields.name = String::new();
        fields.validate().unwrap();
    }

    #[test]
    fn email_invalid() {
        let mut fields = fields();
        fields.email = "not-an-email".into();
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::EmailInvalid
        );
    }

    #[test]
    fn email_too_long() {
        let mut fields = fields();
        fields.email = format!("a@{}com", "aaaaaaaaaa.".repeat(10));
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::EmailTooLong
        );
    }

    #[test]
    fn message_too_short() {
        let mut fields = fields();
        fields.message = "too short".into();
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::MessageTooShort
        );
    }

    #[test]
    fn message_too_long() {
        let mut fields = fields();
        fields.message = "x".repeat(1001);
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::MessageTooLong
        );
    }

    #[test]
    fn message_boundaries() {
        for len in [10, 1000] {
            let mut fields = fields();
            fields.message = "x".repeat(len);
            fields.validate().unwrap();
        }
    }

    #[test]
    fn fields_checked_in_schema_order() {
        // name before email
        let mut fields = fields();
        fields.name = "x".repeat(101);
        fields.email = "not-an-email".into();
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::NameTooLong
        );

        // email before message
        let mut fields = self::fields();
        fields.email = "not-an-email".into();
        fields.message = "nope".into();
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::EmailInvalid
        );

        // a 101 character name wins over a valid email and a valid message
        let mut fields = self::fields();
        fields.name = "x".repeat(101);
        fields.message = "x".repeat(50);
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::NameTooLong
        );
    }

    #[test]
    fn email_format_checked_before_length() {
        let mut fields = fields();
        fields.email = format!("{}@", "a".repeat(110));
        assert_eq!(
            fields.validate().unwrap_err(),
            ContactValidateError::EmailInvalid
        );
    }

    #[test]
    fn submission_serializes_with_plain_field_names() {
        let submission = fields().validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@x.com",
                "message": "Please build me a ten-page site for my bakery.",
            })
        );
    }
}
