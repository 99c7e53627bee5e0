//! Contact form validation and submission state.
//!
//! Validation reports every failing field at once. The submission flow is
//! a small state machine; the web layer owns the timers that simulate the
//! network round trip and clear the terminal status.

use smallvec::SmallVec;

use crate::constants::MESSAGE_MIN_CHARS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub type FieldErrors = SmallVec<[FieldError; 3]>;

pub fn validate(input: &ContactInput) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if input.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }
    let email = input.email.trim();
    if email.is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.push(FieldError::EmailInvalid);
    }
    let message = input.message.trim();
    if message.is_empty() {
        errors.push(FieldError::MessageRequired);
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.push(FieldError::MessageTooShort);
    }
    errors
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace anywhere,
/// non-empty local part, and a dot strictly inside the domain.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.find('.') {
        Some(i) => i > 0 && domain.rfind('.') != Some(domain.len() - 1),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub input: ContactInput,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl ContactForm {
    /// Validate the current input. On success the form enters `Submitting`
    /// and returns true — the caller starts the (simulated) send. On
    /// failure the errors are recorded and nothing else happens.
    pub fn begin_submit(&mut self) -> bool {
        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Resolve the in-flight send. Success clears the fields.
    pub fn complete(&mut self, ok: bool) {
        self.status = if ok {
            self.input = ContactInput::default();
            SubmitStatus::Success
        } else {
            SubmitStatus::Error
        };
    }

    /// Drop a terminal status back to idle (the 5 s auto-clear).
    pub fn clear_status(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Typing into a field clears that field's error.
    pub fn clear_field_error(&mut self, field: Field) {
        self.errors.retain(|e| e.field() != field);
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }
}
