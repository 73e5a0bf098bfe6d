//! User and credential types for the simulated auth flows. Passwords are
//! redacted from `Debug` output so they never reach the logs.

use crate::features::forms::{Field, FormState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name shown for users who signed in without creating an account here.
pub const PLACEHOLDER_NAME: &str = "John Doe";
/// Email shown for users who signed in without creating an account here.
pub const PLACEHOLDER_EMAIL: &str = "john@example.com";

/// Locally fabricated user record kept in the session store. Its presence is
/// the only authorization the dashboard checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockUser {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl MockUser {
    /// Login only collects a phone number; the rest comes from placeholders.
    pub fn from_login(credentials: &Credentials) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            phone: credentials.phone.clone(),
            email: PLACEHOLDER_EMAIL.to_string(),
        }
    }

    pub fn from_registration(registration: &Registration) -> Self {
        Self {
            name: registration.name.clone(),
            phone: registration.phone.clone(),
            email: registration.email.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub phone: String,
    pub password: String,
}

impl Credentials {
    pub fn from_values(values: &FormState) -> Self {
        Self {
            phone: values.text(Field::Phone).to_string(),
            password: values.text(Field::Password).to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Every value is kept exactly as typed.
    pub fn from_values(values: &FormState) -> Self {
        Self {
            name: values.text(Field::Name).to_string(),
            phone: values.text(Field::Phone).to_string(),
            email: values.text(Field::Email).to_string(),
            password: values.text(Field::Password).to_string(),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registration")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
