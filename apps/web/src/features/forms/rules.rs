//! Per-field validation rules. Each rule returns the message to surface, or
//! `None` when the value passes. Rules never look at other fields except
//! `confirm_password`, which compares against the password it is given.

use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid 10-digit phone number";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const OTP_REQUIRED: &str = "OTP is required";
pub const OTP_INVALID: &str = "Please enter a valid 6-digit OTP";

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Digits a phone number must contain once punctuation is stripped.
pub const PHONE_DIGITS: usize = 10;

pub fn name(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(NAME_REQUIRED)
}

/// Loose `local@domain.tld` shape; anything with a non-space run on each side
/// of `@` and a dot in the domain passes.
pub fn email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    let valid = Regex::new(r"\S+@\S+\.\S+").is_ok_and(|regex| regex.is_match(value));
    (!valid).then_some(EMAIL_INVALID)
}

pub fn phone(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(PHONE_REQUIRED);
    }
    (phone_digits(value).len() != PHONE_DIGITS).then_some(PHONE_INVALID)
}

/// Only the ASCII digits of `value`, in order.
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Presence check used at login, where the stored password policy is unknown.
pub fn password_present(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(PASSWORD_REQUIRED)
}

/// Presence plus the minimum length required for new accounts. Length is
/// measured in UTF-16 code units, as browsers report `input.value.length`.
pub fn new_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }
    (value.encode_utf16().count() < MIN_PASSWORD_LENGTH).then_some(PASSWORD_TOO_SHORT)
}

/// Equality with `password`, regardless of whether `password` itself is valid.
pub fn confirm_password(password: &str, confirmation: &str) -> Option<&'static str> {
    (password != confirmation).then_some(PASSWORDS_DIFFER)
}

pub fn terms(accepted: bool) -> Option<&'static str> {
    (!accepted).then_some(TERMS_REQUIRED)
}

pub fn message(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(MESSAGE_REQUIRED)
}

/// Exactly six ASCII digits, no surrounding whitespace.
pub fn otp(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(OTP_REQUIRED);
    }
    let valid = Regex::new(r"^[0-9]{6}$").is_ok_and(|regex| regex.is_match(value));
    (!valid).then_some(OTP_INVALID)
}
