use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulated delivery latency spent by the server before acknowledging a message.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long the "Message Sent!" state stays on screen before the form resets.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Value of the `name`/`id` attributes on the rendered input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Couldn't send your message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Server-side check mirroring the browser's `required`/`type="email"` validation.
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || s.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(ContactError),
}

impl SubmissionPhase {
    /// Submit button is disabled while a submission is in flight or being acknowledged.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting | SubmissionPhase::Submitted)
    }
}

/// State of the contact form: the four field values, which field holds focus,
/// and where the current submission is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactMessage,
    focused: Option<Field>,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn set_focus(&mut self, field: Option<Field>) {
        self.focused = field;
    }

    /// Drops focus only if `field` still holds it; a late blur must not undo
    /// the focus event of the next field.
    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Focused or filled - drives the floating label and highlighted border.
    pub fn is_active(&self, field: Field) -> bool {
        self.focused == Some(field) || !self.value(field).is_empty()
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Starts a submission, returning the message to deliver.
    ///
    /// Returns `None` without touching state while another submission is in
    /// flight or its success is still displayed.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if self.phase.is_busy() {
            return None;
        }
        self.phase = SubmissionPhase::Submitting;
        Some(self.values.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), ContactError>) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        self.phase = match result {
            Ok(()) => SubmissionPhase::Submitted,
            Err(e) => SubmissionPhase::Failed(e),
        };
    }

    /// Ends the success display: back to idle with every field cleared.
    pub fn finish_display(&mut self) {
        if self.phase != SubmissionPhase::Submitted {
            return;
        }
        self.values = ContactMessage::default();
        self.phase = SubmissionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Jane Doe");
        form.update_field(Field::Email, "jane@x.com");
        form.update_field(Field::Subject, "Hi");
        form.update_field(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), &SubmissionPhase::Idle);
        assert_eq!(form.focused(), None);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_field_round_trip() {
        let mut form = ContactForm::new();
        let values = ["", "  padded  ", "line one\nline two", "ünïcødé ✓", "a"];
        for field in Field::ALL {
            for v in values {
                form.update_field(field, v);
                assert_eq!(form.value(field), v);
            }
        }
        // updating one field leaves the others alone
        form.update_field(Field::Name, "only name");
        assert_eq!(form.value(Field::Email), "a");
    }

    #[test]
    fn test_active_state() {
        let mut form = ContactForm::new();
        assert!(Field::ALL.iter().all(|f| !form.is_active(*f)));

        form.set_focus(Some(Field::Email));
        assert!(form.is_active(Field::Email));
        assert!(!form.is_active(Field::Name));

        form.update_field(Field::Name, "x");
        assert!(form.is_active(Field::Name));

        form.set_focus(None);
        assert!(!form.is_active(Field::Email));
        assert!(form.is_active(Field::Name));

        form.update_field(Field::Name, "");
        assert!(!form.is_active(Field::Name));
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut form = ContactForm::new();
        form.set_focus(Some(Field::Name));
        form.set_focus(Some(Field::Subject));
        assert!(!form.is_active(Field::Name));
        assert!(form.is_active(Field::Subject));

        // stale blur from the previous field is ignored
        form.blur(Field::Name);
        assert_eq!(form.focused(), Some(Field::Subject));
        form.blur(Field::Subject);
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn test_submit_guard() {
        let mut form = filled();
        assert!(form.submit().is_some());
        for _ in 0..5 {
            assert!(form.submit().is_none());
            assert_eq!(form.phase(), &SubmissionPhase::Submitting);
        }

        form.finish_submit(Ok(()));
        assert!(form.submit().is_none());
        assert_eq!(form.phase(), &SubmissionPhase::Submitted);

        form.finish_display();
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_submit_snapshots_fields() {
        let mut form = filled();
        let msg = form.submit().expect("idle form should submit");
        assert_eq!(
            msg,
            ContactMessage {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                subject: "Hi".into(),
                message: "Hello there".into(),
            }
        );
    }

    #[test]
    fn test_end_to_end_cycle() {
        let mut form = filled();

        form.submit();
        assert_eq!(form.phase(), &SubmissionPhase::Submitting);

        // first delay elapses
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), &SubmissionPhase::Submitted);
        assert_eq!(form.value(Field::Name), "Jane Doe");

        // second delay elapses
        form.finish_display();
        assert_eq!(form.phase(), &SubmissionPhase::Idle);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_out_of_order_transitions_ignored() {
        let mut form = filled();
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), &SubmissionPhase::Idle);
        form.finish_display();
        assert_eq!(form.value(Field::Subject), "Hi");

        form.submit();
        form.finish_display();
        assert_eq!(form.phase(), &SubmissionPhase::Submitting);
    }

    #[test]
    fn test_failure_preserves_fields_and_allows_retry() {
        let mut form = filled();
        form.submit();
        let cause = ContactError::Delivery("connection reset".into());
        form.finish_submit(Err(cause.clone()));

        assert_eq!(form.phase(), &SubmissionPhase::Failed(cause));
        assert!(!form.phase().is_busy());
        assert_eq!(form.value(Field::Message), "Hello there");

        // failure display never clears the form
        form.finish_display();
        assert_eq!(form.value(Field::Message), "Hello there");

        assert!(form.submit().is_some());
        assert_eq!(form.phase(), &SubmissionPhase::Submitting);
    }

    #[test]
    fn test_validate() {
        let mut msg = ContactMessage {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        assert_eq!(msg.validate(), Ok(()));

        msg.subject = "   ".into();
        assert_eq!(
            msg.validate(),
            Err(ContactError::MissingField(Field::Subject))
        );
        msg.subject = "Hi".into();

        msg.email = "jane@mail.example.co.uk".into();
        assert_eq!(msg.validate(), Ok(()));

        for bad in ["jane", "jane@", "@x.com", "jane@x", "jane@x.", "ja ne@x.com", "a@b@c.com", "a@.b.c", "a@b..c"] {
            msg.email = bad.into();
            assert_eq!(
                msg.validate(),
                Err(ContactError::InvalidEmail(bad.into())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
        assert_eq!(
            ContactError::Rejected("Email is required".into()).to_string(),
            "Email is required"
        );
    }
}
