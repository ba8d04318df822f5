//! Live wiring between field interactions and validation.

use crate::SharedForm;
use keystone_core::Form;
use keystone_validation::{FieldValidator, FormValidator};
use tracing::warn;

/// Reacts to field interactions on one form.
///
/// Committing a field shows its message. Editing a field clears that
/// field's message at once, then a silent pass over the whole form decides
/// whether it may be submitted; the silent pass never displays a message.
/// While a submission is in flight the submit control belongs to the
/// controller and is left untouched.
#[derive(Clone)]
pub struct FormBinding {
    form: SharedForm,
}

impl FormBinding {
    /// Bind to `form`. The submit control starts disabled.
    pub fn attach(form: SharedForm) -> Self {
        form.lock().submit_control_mut().set_disabled(true);
        Self { form }
    }

    pub fn form(&self) -> &SharedForm {
        &self.form
    }

    /// Focus left `name`: validate it and show its message.
    pub fn on_blur(&self, name: &str) -> bool {
        let mut form = self.form.lock();
        match form.get_mut(name) {
            Some(field) => FieldValidator::validate(field, true),
            None => {
                warn!(form = %form.id(), field = %name, "Blur on unknown field");
                false
            }
        }
    }

    /// The value of `name` changed.
    pub fn on_input(&self, name: &str, value: &str) {
        self.edit(name, |field| field.set_value(value));
    }

    /// The checked state of `name` changed.
    pub fn on_toggle(&self, name: &str, checked: bool) {
        self.edit(name, |field| field.set_checked(checked));
    }

    /// Recompute the submit control's enabled state. Returns whether the
    /// form currently passes validation.
    pub fn refresh(&self) -> bool {
        let mut form = self.form.lock();
        Self::sync_control(&mut form)
    }

    fn edit(&self, name: &str, apply: impl FnOnce(&mut keystone_core::FormField)) {
        let mut form = self.form.lock();
        match form.get_mut(name) {
            Some(field) => {
                apply(field);
                field.clear_error();
            }
            None => {
                warn!(form = %form.id(), field = %name, "Input on unknown field");
                return;
            }
        }
        Self::sync_control(&mut form);
    }

    fn sync_control(form: &mut Form) -> bool {
        let ready = FormValidator::validate_silent(Some(&mut *form));
        if !form.submit_control().is_busy() {
            form.submit_control_mut().set_disabled(!ready);
        }
        ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_core::FormField;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn bound_application() -> FormBinding {
        FormBinding::attach(Arc::new(Mutex::new(
            Form::new("application", "/f/apply")
                .field(FormField::text("full_name").required().min_length(2))
                .field(FormField::email("email").required())
                .field(FormField::tel("phone"))
                .field(FormField::checkbox("consent").required()),
        )))
    }

    fn disabled(binding: &FormBinding) -> bool {
        binding.form().lock().submit_control().is_disabled()
    }

    #[test]
    fn test_starts_disabled() {
        assert!(disabled(&bound_application()));
    }

    #[test]
    fn test_enabled_once_everything_valid() {
        let binding = bound_application();
        binding.on_input("full_name", "Ada Lovelace");
        binding.on_input("email", "ada@example.org");
        assert!(disabled(&binding));

        binding.on_toggle("consent", true);
        assert!(!disabled(&binding));

        binding.on_input("phone", "12");
        assert!(disabled(&binding), "optional fields still have to be well formed once filled");
    }

    #[test]
    fn test_blur_shows_message() {
        let binding = bound_application();
        binding.on_input("email", "not-an-email");
        {
            let form = binding.form().lock();
            assert!(form.get("email").unwrap().error().is_none());
        }

        assert!(!binding.on_blur("email"));
        let form = binding.form().lock();
        assert_eq!(
            form.get("email").unwrap().error(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_input_clears_own_message_without_showing_others() {
        let binding = bound_application();
        binding.on_blur("full_name");
        assert!(binding.form().lock().get("full_name").unwrap().aria_invalid());

        binding.on_input("full_name", "A");
        let form = binding.form().lock();
        assert!(form.fields().iter().all(|f| f.error().is_none()));
    }

    #[test]
    fn test_busy_control_left_alone() {
        let binding = bound_application();
        binding.on_input("full_name", "Ada Lovelace");
        binding.on_input("email", "ada@example.org");
        binding.on_toggle("consent", true);
        assert!(!disabled(&binding));

        binding.form().lock().submit_control_mut().begin_busy("Sending...");
        binding.on_input("full_name", "Grace Hopper");
        assert!(binding.refresh());
        assert!(disabled(&binding));
        assert!(binding.form().lock().submit_control().is_busy());
    }

    #[test]
    fn test_unknown_field_ignored() {
        let binding = bound_application();
        binding.on_input("nickname", "Ada");
        assert!(!binding.on_blur("nickname"));
        assert!(disabled(&binding));
    }
}
