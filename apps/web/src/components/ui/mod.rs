mod alert;
mod button;
mod field;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use field::{CheckboxField, TextField};
pub(crate) use spinner::Spinner;
