// Field validator: runs the rule chain and manages the inline error display

use crate::{FieldRules, ValidationError};
use keystone_core::{FormField, Result};
use tracing::error;

/// Result of validating one field. Created fresh on every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// The first failing rule's message; empty when valid
    pub message: String,
    /// The failing rule in detail
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
            error: None,
        }
    }

    pub fn fail(error: ValidationError) -> Self {
        Self {
            valid: false,
            message: error.message.clone(),
            error: Some(error),
        }
    }
}

/// Validates a single field against its declared constraints.
pub struct FieldValidator;

impl FieldValidator {
    /// Evaluate the field without touching its display.
    ///
    /// Errors only when the field's constraint attributes are malformed.
    pub fn check(field: &FormField) -> Result<ValidationResult> {
        let descriptor = field.descriptor()?;
        let rules = FieldRules::for_descriptor(field.name(), &descriptor);

        Ok(match rules.check(field.value(), field.is_checked()) {
            Ok(()) => ValidationResult::pass(),
            Err(e) => ValidationResult::fail(e),
        })
    }

    /// Evaluate the field and update its display.
    ///
    /// With `show_message` and an invalid field, the message is displayed and
    /// the field flagged invalid. In every other case any existing message is
    /// removed.
    pub fn try_validate(field: &mut FormField, show_message: bool) -> Result<bool> {
        let result = Self::check(field)?;
        if !result.valid && show_message {
            field.show_error(result.message);
        } else {
            field.clear_error();
        }
        Ok(result.valid)
    }

    /// Like [`FieldValidator::try_validate`], but a malformed field counts as
    /// invalid instead of returning an error.
    pub fn validate(field: &mut FormField, show_message: bool) -> bool {
        match Self::try_validate(field, show_message) {
            Ok(valid) => valid,
            Err(e) => {
                error!(field = %field.name(), error = %e, "Field validation failed");
                field.clear_error();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_shows_message() {
        let mut field = FormField::email("email").required().with_value("not-an-email");

        assert!(!FieldValidator::validate(&mut field, true));
        assert_eq!(field.error(), Some("Please enter a valid email address"));
        assert!(field.aria_invalid());
    }

    #[test]
    fn test_silent_pass_clears_message() {
        let mut field = FormField::text("name").required();
        assert!(!FieldValidator::validate(&mut field, true));
        assert!(field.aria_invalid());

        assert!(!FieldValidator::validate(&mut field, false));
        assert!(!field.aria_invalid());
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_valid_clears_stale_message() {
        let mut field = FormField::tel("phone").required().with_value("(555) 123-4567");
        field.show_error("stale");

        assert!(FieldValidator::validate(&mut field, true));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_check_is_pure() {
        let field = FormField::text("name").required().min_length(3).with_value("Al");
        let result = FieldValidator::check(&field).unwrap();

        assert!(!result.valid);
        assert_eq!(result.message, "Minimum 3 characters required");
        assert_eq!(result.error.unwrap().constraint, "minLength");
        assert!(!field.aria_invalid());
    }

    #[test]
    fn test_malformed_field_is_invalid() {
        let mut field = FormField::text("name")
            .with_minlength_attr("lots")
            .with_value("anything");

        assert!(FieldValidator::try_validate(&mut field, true).is_err());
        assert!(!FieldValidator::validate(&mut field, true));
        assert!(!field.aria_invalid());
    }

    #[test]
    fn test_unchecked_required_checkbox() {
        let mut terms = FormField::checkbox("terms").required();
        assert!(!FieldValidator::validate(&mut terms, true));
        assert_eq!(terms.error(), Some("You must agree to this"));

        terms.set_checked(true);
        assert!(FieldValidator::validate(&mut terms, true));
        assert!(!terms.aria_invalid());
    }
}
