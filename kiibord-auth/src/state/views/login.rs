use super::field::Field;
use crate::{services::ServiceError, validation::validate_email};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: Field,
    pub processing: bool,
    /// Form level error, set when the code could not be requested.
    pub error: Option<String>,
}

impl LoginForm {
    pub fn on_update_email(&mut self, email: String) {
        self.email.update(email, validate_email);
    }

    /// Validates the form, returns the email to request a code for.
    pub fn submit(&mut self) -> Option<String> {
        if self.processing {
            return None;
        }
        if !self.email.validate(validate_email) {
            tracing::debug!("login: submit blocked by invalid email");
            return None;
        }
        self.processing = true;
        self.error = None;
        Some(self.email.value.clone())
    }

    pub fn on_code_request_failed(&mut self, error: &ServiceError) {
        self.processing = false;
        self.error = Some(error.to_string());
    }

    pub fn can_submit(&self) -> bool {
        !self.processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn submit_blocked_by_invalid_email() {
        let mut form = LoginForm::default();
        assert_eq!(form.submit(), None);
        assert_eq!(form.email.error, Some(ValidationError::EmailRequired));

        form.on_update_email("not-an-email".to_string());
        assert_eq!(form.submit(), None);
        assert_eq!(form.email.error, Some(ValidationError::EmailInvalid));
        assert!(!form.processing);
    }

    #[test]
    fn submit_valid_email() {
        let mut form = LoginForm::default();
        form.on_update_email("warrior@kiibord.gg".to_string());
        assert_eq!(form.submit(), Some("warrior@kiibord.gg".to_string()));
        assert!(form.processing);
        assert!(!form.can_submit());
        // No double submission while the request is in flight.
        assert_eq!(form.submit(), None);

        form.on_code_request_failed(&ServiceError::RateLimited);
        assert!(form.can_submit());
        assert_eq!(
            form.error.as_deref(),
            Some("Too many attempts, try again later")
        );
        assert_eq!(form.email.error, None);
    }
}
