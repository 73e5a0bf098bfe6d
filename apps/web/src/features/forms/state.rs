//! Field values and per-field validation errors for a single form.

use std::collections::BTreeMap;
use std::fmt;

/// Every input the site's forms know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
    Remember,
    Message,
    Otp,
}

impl Field {
    /// Name used for the input's `name`/`id` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms => "terms",
            Field::Remember => "remember",
            Field::Message => "message",
            Field::Otp => "otp",
        }
    }

    /// Checkbox fields hold a flag instead of text.
    pub const fn is_flag(self) -> bool {
        matches!(self, Field::Terms | Field::Remember)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    fn default_for(field: Field) -> Self {
        if field.is_flag() {
            FieldValue::Flag(false)
        } else {
            FieldValue::Text(String::new())
        }
    }
}

/// Live values of a form's inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<Field, FieldValue>,
}

impl FormState {
    /// Empty text and unchecked flags for each field.
    pub fn with_fields(fields: &[Field]) -> Self {
        Self {
            values: fields
                .iter()
                .map(|&field| (field, FieldValue::default_for(field)))
                .collect(),
        }
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, field: Field, value: bool) {
        self.values.insert(field, FieldValue::Flag(value));
    }

    /// Text value, or `""` for missing and flag fields.
    pub fn text(&self, field: Field) -> &str {
        match self.values.get(&field) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Flag value, or `false` for missing and text fields.
    pub fn flag(&self, field: Field) -> bool {
        matches!(self.values.get(&field), Some(FieldValue::Flag(true)))
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.keys().copied()
    }
}

/// Field name to the message of its last failed rule.
///
/// A missing entry means "no currently known error", not "valid": rules only
/// run on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    entries: BTreeMap<Field, String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Records `message` when a rule returned one.
    pub fn check(&mut self, field: Field, outcome: Option<&'static str>) {
        if let Some(message) = outcome {
            self.insert(field, message);
        }
    }

    /// Drops the entry for `field`; returns whether one existed.
    pub fn clear(&mut self, field: Field) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
