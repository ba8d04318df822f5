// Form validator: aggregates field results across a form

use crate::{FieldValidator, ValidationErrors};
use keystone_core::Form;
use tracing::{error, warn};

/// Validates every required field in a form.
pub struct FormValidator;

impl FormValidator {
    /// Validate all required fields, forwarding `show_errors` to each.
    ///
    /// Every required field is visited so all messages appear at once.
    /// Fails closed: a missing form or a malformed field yields `false` and a
    /// log entry, never a panic or an error.
    pub fn validate(form: Option<&mut Form>, show_errors: bool) -> bool {
        let Some(form) = form else {
            warn!("Form validation requested without a form");
            return false;
        };

        let form_id = form.id().to_string();
        let mut all_valid = true;
        for field in form.required_fields_mut() {
            match FieldValidator::try_validate(field, show_errors) {
                Ok(valid) => all_valid &= valid,
                Err(e) => {
                    error!(form = %form_id, error = %e, "Form validation aborted");
                    return false;
                }
            }
        }

        all_valid
    }

    /// Silent pass: decides validity without displaying any message.
    pub fn validate_silent(form: Option<&mut Form>) -> bool {
        Self::validate(form, false)
    }

    /// Collect every required field's failure without touching the display.
    ///
    /// Malformed fields are reported as a failure with constraint `malformed`.
    pub fn collect(form: &Form) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in form.required_fields() {
            match FieldValidator::check(field) {
                Ok(result) => {
                    if let Some(e) = result.error {
                        errors.add(e);
                    }
                }
                Err(e) => errors.add(
                    crate::ValidationError::new(field.name(), e.to_string())
                        .with_constraint("malformed"),
                ),
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
