use super::field::Field;
use crate::{
    services::ServiceError,
    validation::{validate_email, validate_username, ValidationError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
}

fn username_rule(value: &str) -> Result<(), ValidationError> {
    validate_username(value).map(|_| ())
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: Field,
    pub email: Field,
    pub processing: bool,
    pub error: Option<String>,
    /// Field that received the last edit, validated when the user moves to the other one.
    editing: Option<RegisterField>,
}

/// Submitted registration, username trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
}

impl RegisterForm {
    pub fn on_update_username(&mut self, username: String) {
        self.blur_other(RegisterField::Username);
        self.username.update(username, username_rule);
    }

    pub fn on_update_email(&mut self, email: String) {
        self.blur_other(RegisterField::Email);
        self.email.update(email, validate_email);
    }

    fn blur_other(&mut self, field: RegisterField) {
        match self.editing.replace(field) {
            Some(RegisterField::Username) if field != RegisterField::Username => {
                self.username.validate(username_rule);
            }
            Some(RegisterField::Email) if field != RegisterField::Email => {
                self.email.validate(validate_email);
            }
            _ => {}
        }
    }

    /// Both fields are validated, submission is blocked if either fails.
    pub fn submit(&mut self) -> Option<Registration> {
        if self.processing {
            return None;
        }
        let username_valid = self.username.validate(username_rule);
        let email_valid = self.email.validate(validate_email);
        if !username_valid || !email_valid {
            tracing::debug!(
                "register: submit blocked, username valid={} email valid={}",
                username_valid,
                email_valid
            );
            return None;
        }
        let username = validate_username(&self.username.value).ok()?;
        self.processing = true;
        self.error = None;
        Some(Registration {
            username,
            email: self.email.value.clone(),
        })
    }

    pub fn on_code_request_failed(&mut self, error: &ServiceError) {
        self.processing = false;
        self.error = Some(error.to_string());
    }

    pub fn can_submit(&self) -> bool {
        !self.processing
    }
}
