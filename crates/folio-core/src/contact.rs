//! Contact form validation and submit state.

use crate::constants::{MIN_MESSAGE_CHARS, SUCCESS_NOTICE_MS};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id of the input; the inline error lives at `{id}-error`.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// Validation failure; `Display` is the text shown next to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::MessageTooShort => Field::Message,
        }
    }
}

pub type FieldErrors = SmallVec<[FieldError; 3]>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Every rule is checked so all failing fields are reported together.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            errors.push(FieldError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld`: no whitespace, one `@`, and some dot inside the domain
/// with something on both sides. Trailing or doubled dots are accepted.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was reset; errors are shown inline.
    Rejected(FieldErrors),
    /// Form cleared; success notice is visible until `notice_ms` elapses.
    Sent { notice_ms: i32 },
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    errors: FieldErrors,
    notice_visible: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn notice_visible(&self) -> bool {
        self.notice_visible
    }

    /// User typed into `field`: store the value and drop its error.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.retain(|e| e.field() != field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        match self.fields.validate() {
            Ok(()) => {
                log::debug!("[contact] message accepted");
                self.errors.clear();
                self.fields = ContactFields::default();
                self.notice_visible = true;
                SubmitOutcome::Sent {
                    notice_ms: SUCCESS_NOTICE_MS,
                }
            }
            Err(errors) => {
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice_visible = false;
    }
}
