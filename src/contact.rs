use std::collections::BTreeMap;

use crate::error::{ContactError, RelayError};
use crate::timer::{TimerSlot, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Transient banner text for the terminal states.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("Message sent successfully!"),
            SubmissionStatus::Error => Some("Failed to send message. Please try again."),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Form field name sent to the relay.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// The contact form buffer and its submission lifecycle:
/// `Idle → Submitting → (Success | Error) → Idle`.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmissionStatus,
    /// Why the last submit attempt was refused, cleared on edit.
    rejection: Option<ContactError>,
    reset_timer: TimerSlot,
}

impl ContactForm {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn rejection(&self) -> Option<&ContactError> {
        self.rejection.as_ref()
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.rejection = None;
    }

    /// Start a submission. Only accepted from `Idle` and with all required
    /// fields filled in; returns the fields to send, keyed by form name.
    pub fn begin_submit(&mut self) -> Result<BTreeMap<String, String>, ContactError> {
        if self.status != SubmissionStatus::Idle {
            return Err(ContactError::NotIdle(self.status));
        }
        if let Err(e) = self.check_required() {
            self.rejection = Some(e.clone());
            return Err(e);
        }
        self.rejection = None;
        self.status = SubmissionStatus::Submitting;
        Ok([Field::Name, Field::Email, Field::Message]
            .into_iter()
            .map(|f| (f.name().to_string(), self.value(f).to_string()))
            .collect())
    }

    /// Record the relay outcome and arm the banner reset. Ignored unless a
    /// submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), RelayError>) -> Option<TimerToken> {
        if self.status != SubmissionStatus::Submitting {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {e}");
                // Buffer kept so the user can correct and resend.
                self.status = SubmissionStatus::Error;
            }
        }
        Some(self.reset_timer.arm())
    }

    /// Return to `Idle` if `token` is the live reset timer.
    pub fn on_reset_elapsed(&mut self, token: TimerToken) -> bool {
        if !self.reset_timer.fire(token) {
            return false;
        }
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
            self.status = SubmissionStatus::Idle;
        }
        true
    }

    pub fn cancel_timers(&mut self) {
        self.reset_timer.cancel();
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// The checks a browser applies to `required` and `type="email"` inputs.
    fn check_required(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::MissingField(field.name()));
            }
        }
        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut f = ContactForm::default();
        f.set(Field::Name, "Ada".into());
        f.set(Field::Email, "ada@example.com".into());
        f.set(Field::Message, "Hello there".into());
        f
    }

    #[test]
    fn test_submit_moves_to_submitting() {
        let mut f = filled();
        let fields = f.begin_submit().unwrap();
        assert_eq!(f.status(), SubmissionStatus::Submitting);
        assert_eq!(fields["name"], "Ada");
        assert_eq!(fields["email"], "ada@example.com");
        assert_eq!(fields["message"], "Hello there");
    }

    #[test]
    fn test_success_clears_buffer_then_resets() {
        let mut f = filled();
        f.begin_submit().unwrap();
        let token = f.finish(Ok(())).unwrap();
        assert_eq!(f.status(), SubmissionStatus::Success);
        assert!(f.name.is_empty() && f.email.is_empty() && f.message.is_empty());
        assert_eq!(f.status().banner(), Some("Message sent successfully!"));

        assert!(f.on_reset_elapsed(token));
        assert_eq!(f.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_error_keeps_buffer() {
        let mut f = filled();
        f.begin_submit().unwrap();
        let token = f
            .finish(Err(RelayError::Rejected { status: 400, body: "bad".into() }))
            .unwrap();
        assert_eq!(f.status(), SubmissionStatus::Error);
        assert_eq!(f.name, "Ada");
        assert_eq!(f.message, "Hello there");

        assert!(f.on_reset_elapsed(token));
        assert_eq!(f.status(), SubmissionStatus::Idle);
        // Resend with the preserved buffer.
        assert!(f.begin_submit().is_ok());
    }

    #[test]
    fn test_only_idle_can_submit() {
        let mut f = filled();
        f.begin_submit().unwrap();
        assert_eq!(
            f.begin_submit(),
            Err(ContactError::NotIdle(SubmissionStatus::Submitting))
        );

        f.finish(Err(RelayError::Transport("offline".into())));
        assert_eq!(f.begin_submit(), Err(ContactError::NotIdle(SubmissionStatus::Error)));
    }

    #[test]
    fn test_required_fields() {
        let mut f = ContactForm::default();
        f.set(Field::Name, "Ada".into());
        f.set(Field::Email, "ada@example.com".into());
        f.set(Field::Message, "   ".into());
        assert_eq!(f.begin_submit(), Err(ContactError::MissingField("message")));
        assert_eq!(f.status(), SubmissionStatus::Idle);
        assert!(f.rejection().is_some());

        f.set(Field::Message, "hi".into());
        assert!(f.rejection().is_none());
    }

    #[test]
    fn test_email_shape() {
        let mut f = filled();
        f.set(Field::Email, "not-an-email".into());
        assert_eq!(f.begin_submit(), Err(ContactError::InvalidEmail));
        f.set(Field::Email, "a@b@c".into());
        assert_eq!(f.begin_submit(), Err(ContactError::InvalidEmail));
        f.set(Field::Email, "@example.com".into());
        assert_eq!(f.begin_submit(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_canceled_reset_is_ignored() {
        let mut f = filled();
        f.begin_submit().unwrap();
        let token = f.finish(Ok(())).unwrap();
        f.cancel_timers();
        assert!(!f.on_reset_elapsed(token));
        assert_eq!(f.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_finish_without_submission_is_ignored() {
        let mut f = filled();
        assert!(f.finish(Ok(())).is_none());
        assert_eq!(f.status(), SubmissionStatus::Idle);
        assert_eq!(f.name, "Ada");
    }
}
