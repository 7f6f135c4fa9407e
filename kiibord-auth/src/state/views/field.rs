use crate::validation::ValidationError;

pub type Rule = fn(&str) -> Result<(), ValidationError>;

/// Input value with its last validation outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub error: Option<ValidationError>,
}

impl Field {
    /// A field showing an error is re-validated on every change so the message goes away as
    /// soon as the value is fixed.
    pub fn update(&mut self, value: String, rule: Rule) {
        self.value = value;
        if self.error.is_some() {
            self.validate(rule);
        }
    }

    pub fn validate(&mut self, rule: Rule) -> bool {
        self.error = rule(&self.value).err();
        self.error.is_none()
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.error.as_ref().map(ValidationError::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_email;

    #[test]
    fn revalidates_only_once_invalid() {
        let mut field = Field::default();
        field.update("not-an-email".to_string(), validate_email);
        assert_eq!(field.error, None);

        assert!(!field.validate(validate_email));
        assert_eq!(field.warning(), Some("Please enter a valid email address"));

        field.update(String::new(), validate_email);
        assert_eq!(field.warning(), Some("Email is required"));

        field.update("warrior@kiibord.gg".to_string(), validate_email);
        assert_eq!(field.error, None);
    }
}
