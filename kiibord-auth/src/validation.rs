//! Field rules shared by the login, registration and code verification forms.

use crate::config::{OTP_LENGTH, USERNAME_MIN_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Battle tag is required")]
    UsernameRequired,
    #[error("Battle tag must be at least 2 characters")]
    UsernameTooShort,
    #[error("Required")]
    DigitRequired,
    #[error("Must be a digit")]
    NotADigit,
    #[error("Please enter the complete verification code")]
    IncompleteCode,
}

impl ValidationError {
    /// Static message for views that need a `&str` outliving the error value.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmailRequired => "Email is required",
            Self::EmailInvalid => "Please enter a valid email address",
            Self::UsernameRequired => "Battle tag is required",
            Self::UsernameTooShort => "Battle tag must be at least 2 characters",
            Self::DigitRequired => "Required",
            Self::NotADigit => "Must be a digit",
            Self::IncompleteCode => "Please enter the complete verification code",
        }
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default().with_required_tld(),
    )
    .map(|_| ())
    .map_err(|_| ValidationError::EmailInvalid)
}

/// Returns the trimmed battle tag.
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if username.chars().count() < USERNAME_MIN_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    Ok(username.to_string())
}

pub fn validate_digit(digit: &str) -> Result<(), ValidationError> {
    let mut chars = digit.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ValidationError::DigitRequired),
        (Some(c), None) if c.is_ascii_digit() => Ok(()),
        _ => Err(ValidationError::NotADigit),
    }
}

/// Returns the concatenated code.
pub fn validate_otp(digits: &[String]) -> Result<String, ValidationError> {
    if digits.len() != OTP_LENGTH || digits.iter().any(|d| validate_digit(d).is_err()) {
        return Err(ValidationError::IncompleteCode);
    }
    Ok(digits.concat())
}
