//! Browser-side contact form controller.
//!
//! The controller owns the form's UI state machine and talks to the backend
//! through a [`ContactGateway`]. It is deliberately free of any DOM or timer
//! machinery: the embedding shell renders [`FormController::state`] and
//! schedules returned [`ClearTimer`]s after [`CLEAR_DELAY`], which keeps the
//! whole state machine testable with simulated time.

use std::{future::Future, time::Duration};

use atelier_models::contact::{ContactFields, ContactSubmission};
use thiserror::Error;

pub mod gateway;

/// How long success and error notices stay on screen before the form
/// returns to idle.
pub const CLEAR_DELAY: Duration = Duration::from_secs(5);

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactGateway: Send + Sync + 'static {
    /// Deliver a validated submission to the contact endpoint.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    /// The server answered with an error payload; the message is shown to
    /// the visitor as-is.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Handle for a scheduled auto-clear. Stamped with the controller epoch at
/// creation so a timer that outlived its state change clears nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTimer {
    epoch: u64,
}

#[derive(Debug)]
pub struct FormController<Gateway> {
    gateway: Gateway,
    state: FormState,
    epoch: u64,
}

impl<Gateway> FormController<Gateway>
where
    Gateway: ContactGateway,
{
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: FormState::Idle,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Handle a form submit. Validates locally with the same rules the
    /// server applies (a UX shortcut, not a trust boundary) and only then
    /// performs the network call. The returned timer must be scheduled by
    /// the caller after [`CLEAR_DELAY`].
    pub async fn submit(&mut self, fields: ContactFields) -> ClearTimer {
        self.transition(FormState::Submitting);

        let result = match fields.validate() {
            Ok(submission) => self
                .gateway
                .submit(submission)
                .await
                .map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        match result {
            Ok(()) => self.transition(FormState::Success),
            Err(message) => self.transition(FormState::Error(message)),
        }

        ClearTimer { epoch: self.epoch }
    }

    /// Fire a scheduled auto-clear. Ignored if any transition happened
    /// since the timer was handed out.
    pub fn clear(&mut self, timer: ClearTimer) {
        if timer.epoch == self.epoch {
            self.transition(FormState::Idle);
        }
    }

    /// Manually dismiss an error notice.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, FormState::Error(_)) {
            self.transition(FormState::Idle);
        }
    }

    /// "Send another message": reset from success back to an empty form.
    pub fn reset(&mut self) {
        if self.state == FormState::Success {
            self.transition(FormState::Idle);
        }
    }

    fn transition(&mut self, state: FormState) {
        self.epoch += 1;
        self.state = state;
    }
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

    fn submission() -> ContactSubmission {
        fields().validate().unwrap()
    }

    fn gateway_ok() -> MockContactGateway {
        let mut gateway = MockContactGateway::new();
        gateway
            .expect_submit()
            .once()
            .with(mockall::predicate::eq(submission()))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        gateway
    }

    #[tokio::test]
    async fn successful_submission_then_auto_clear() {
        let mut sut = FormController::new(gateway_ok());
        assert_eq!(*sut.state(), FormState::Idle);

        let timer = sut.submit(fields()).await;
        assert_eq!(*sut.state(), FormState::Success);

        // 5 simulated seconds later
        sut.clear(timer);
        assert_eq!(*sut.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn local_validation_failure_skips_the_network() {
        // no expectations: the gateway must not be called
        let mut sut = FormController::new(MockContactGateway::new());

        let mut fields = fields();
        fields.message = "too short".into();
        let timer = sut.submit(fields).await;

        assert_eq!(
            *sut.state(),
            FormState::Error("Message must be at least 10 characters".into())
        );

        sut.clear(timer);
        assert_eq!(*sut.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn server_rejection_message_is_displayed() {
        let mut gateway = MockContactGateway::new();
        gateway.expect_submit().once().return_once(|_| {
            Box::pin(std::future::ready(Err(ContactSubmitError::Rejected(
                "Email configuration error".into(),
            ))))
        });

        let mut sut = FormController::new(gateway);
        sut.submit(fields()).await;

        assert_eq!(
            *sut.state(),
            FormState::Error("Email configuration error".into())
        );
    }

    #[tokio::test]
    async fn network_failure_message_is_displayed() {
        let mut gateway = MockContactGateway::new();
        gateway.expect_submit().once().return_once(|_| {
            Box::pin(std::future::ready(Err(ContactSubmitError::Other(
                anyhow::anyhow!("Failed to send contact request"),
            ))))
        });

        let mut sut = FormController::new(gateway);
        sut.submit(fields()).await;

        assert_eq!(
            *sut.state(),
            FormState::Error("Failed to send contact request".into())
        );
    }

    #[tokio::test]
    async fn manual_reset_cancels_the_pending_timer() {
        let mut gateway = MockContactGateway::new();
        gateway
            .expect_submit()
            .times(2)
            .returning(|_| Box::pin(std::future::ready(Ok(()))));

        let mut sut = FormController::new(gateway);

        let stale = sut.submit(fields()).await;
        assert_eq!(*sut.state(), FormState::Success);

        // user clicks "send another message" before the timeout elapses
        sut.reset();
        assert_eq!(*sut.state(), FormState::Idle);

        // the stale timer fires while a newer submission is on screen
        let timer = sut.submit(fields()).await;
        sut.clear(stale);
        assert_eq!(*sut.state(), FormState::Success);
        sut.clear(timer);
        assert_eq!(*sut.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn manual_dismiss_cancels_the_pending_timer() {
        let mut gateway = MockContactGateway::new();
        gateway.expect_submit().times(2).returning(|_| {
            Box::pin(std::future::ready(Err(ContactSubmitError::Rejected(
                "Failed to send message".into(),
            ))))
        });

        let mut sut = FormController::new(gateway);
        let stale = sut.submit(fields()).await;

        sut.dismiss_error();
        assert_eq!(*sut.state(), FormState::Idle);

        // the old timer must not clear the newer error state
        sut.submit(fields()).await;
        sut.clear(stale);
        assert_eq!(
            *sut.state(),
            FormState::Error("Failed to send message".into())
        );
    }

    #[test]
    fn dismiss_is_a_no_op_outside_error() {
        let mut sut = FormController::new(MockContactGateway::new());
        sut.dismiss_error();
        sut.reset();
        assert_eq!(*sut.state(), FormState::Idle);
    }
}
