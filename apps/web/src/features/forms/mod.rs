//! Form validation engine shared by the login, signup, contact and
//! password-recovery pages.
//!
//! A [`Form`] owns the live values and the last computed errors. Validation is
//! pure and only runs on submit; editing a field drops that field's error
//! immediately without re-checking the new value (optimistic clear).

pub mod rules;
mod state;

pub use state::{ErrorState, Field, FieldValue, FormState};

use crate::app_lib::AppError;
use std::fmt;

/// Why a submitted form did not complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Validation failed; the messages are already on the form.
    Invalid(ErrorState),
    /// Validation passed but the collaborator or the session store failed.
    Failed(AppError),
}

impl SubmitError {
    /// Form-level banner text. Field errors render beside their inputs instead.
    pub fn banner(&self) -> Option<String> {
        match self {
            SubmitError::Invalid(_) => None,
            SubmitError::Failed(err) => Some(err.to_string()),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => {
                write!(formatter, "{} field(s) failed validation", errors.len())
            }
            SubmitError::Failed(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<AppError> for SubmitError {
    fn from(err: AppError) -> Self {
        SubmitError::Failed(err)
    }
}

impl From<crate::app_lib::ServiceError> for SubmitError {
    fn from(err: crate::app_lib::ServiceError) -> Self {
        SubmitError::Failed(err.into())
    }
}

/// The forms on the site, each with its own field set and rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
    Contact,
    RecoveryPhone,
    RecoveryOtp,
}

impl FormKind {
    pub const fn fields(self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Phone, Field::Password, Field::Remember],
            FormKind::Signup => &[
                Field::Name,
                Field::Phone,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::Terms,
            ],
            FormKind::Contact => &[Field::Name, Field::Email, Field::Phone, Field::Message],
            FormKind::RecoveryPhone => &[Field::Phone],
            FormKind::RecoveryOtp => &[Field::Otp],
        }
    }

    /// Runs every rule of this form; fields are checked independently.
    pub fn validate(self, values: &FormState) -> ErrorState {
        let mut errors = ErrorState::new();
        match self {
            FormKind::Login => {
                errors.check(Field::Phone, rules::phone(values.text(Field::Phone)));
                errors.check(
                    Field::Password,
                    rules::password_present(values.text(Field::Password)),
                );
            }
            FormKind::Signup => {
                errors.check(Field::Name, rules::name(values.text(Field::Name)));
                errors.check(Field::Phone, rules::phone(values.text(Field::Phone)));
                errors.check(Field::Email, rules::email(values.text(Field::Email)));
                errors.check(
                    Field::Password,
                    rules::new_password(values.text(Field::Password)),
                );
                errors.check(
                    Field::ConfirmPassword,
                    rules::confirm_password(
                        values.text(Field::Password),
                        values.text(Field::ConfirmPassword),
                    ),
                );
                errors.check(Field::Terms, rules::terms(values.flag(Field::Terms)));
            }
            FormKind::Contact => {
                errors.check(Field::Name, rules::name(values.text(Field::Name)));
                errors.check(Field::Email, rules::email(values.text(Field::Email)));
                errors.check(Field::Phone, rules::phone(values.text(Field::Phone)));
                errors.check(Field::Message, rules::message(values.text(Field::Message)));
            }
            FormKind::RecoveryPhone => {
                errors.check(Field::Phone, rules::phone(values.text(Field::Phone)));
            }
            FormKind::RecoveryOtp => {
                errors.check(Field::Otp, rules::otp(values.text(Field::Otp)));
            }
        }
        errors
    }
}

/// Values plus errors for one form instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    kind: FormKind,
    values: FormState,
    errors: ErrorState,
}

impl Form {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: FormState::with_fields(kind.fields()),
            errors: ErrorState::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn text(&self, field: Field) -> &str {
        self.values.text(field)
    }

    pub fn flag(&self, field: Field) -> bool {
        self.values.flag(field)
    }

    /// Updates a text input and clears only that field's error.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.values.set_text(field, value);
        self.errors.clear(field);
    }

    /// Updates a checkbox and clears only that field's error.
    pub fn set_flag(&mut self, field: Field, value: bool) {
        self.values.set_flag(field, value);
        self.errors.clear(field);
    }

    /// Recomputes all errors; `true` when none remain.
    pub fn validate(&mut self) -> bool {
        self.errors = self.kind.validate(&self.values);
        self.errors.is_empty()
    }

    /// Validates and hands back a snapshot of the values when submission may
    /// proceed. On failure the errors are kept on the form for display.
    pub fn submit(&mut self) -> Result<FormState, ErrorState> {
        if self.validate() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Back to defaults, no errors.
    pub fn reset(&mut self) {
        self.values = FormState::with_fields(self.kind.fields());
        self.errors = ErrorState::new();
    }
}
