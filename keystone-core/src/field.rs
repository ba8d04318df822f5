//! Form fields and their declared constraints.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value a checkbox submits when checked and no explicit value is set.
pub const DEFAULT_CHECKBOX_VALUE: &str = "on";

/// Type discriminator of a field, read from its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Checkbox,
    Other,
}

impl FieldKind {
    /// Interpret an HTML `type` attribute (or element name for `textarea`).
    pub fn from_type_attr(attr: &str) -> Self {
        match attr.trim().to_ascii_lowercase().as_str() {
            "" | "text" | "textarea" | "search" | "password" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "checkbox" => FieldKind::Checkbox,
            _ => FieldKind::Other,
        }
    }

    /// Whether the field holds free text (as opposed to a checked state).
    pub fn is_text_like(&self) -> bool {
        !matches!(self, FieldKind::Checkbox)
    }
}

/// Constraints of a field, parsed from its markup attributes.
///
/// Immutable for the duration of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub required: bool,
    pub min_length: Option<usize>,
    pub kind: FieldKind,
}

/// A single named input within a form.
///
/// The inline error text and the `aria-invalid` flag share one piece of
/// state, so one can never be shown without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    kind: FieldKind,
    value: String,
    checked: bool,
    required: bool,
    minlength_attr: Option<String>,
    error: Option<String>,
}

impl FormField {
    /// Create a field from its name and `type` attribute.
    pub fn new(name: impl Into<String>, type_attr: &str) -> Self {
        let kind = FieldKind::from_type_attr(type_attr);
        Self {
            name: name.into(),
            kind,
            value: if kind == FieldKind::Checkbox {
                DEFAULT_CHECKBOX_VALUE.to_string()
            } else {
                String::new()
            },
            checked: false,
            required: false,
            minlength_attr: None,
            error: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, "text")
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, "email")
    }

    pub fn tel(name: impl Into<String>) -> Self {
        Self::new(name, "tel")
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, "checkbox")
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the `minlength` constraint.
    pub fn min_length(mut self, min: usize) -> Self {
        self.minlength_attr = Some(min.to_string());
        self
    }

    /// Set the raw `minlength` attribute exactly as it appears in markup.
    pub fn with_minlength_attr(mut self, attr: impl Into<String>) -> Self {
        self.minlength_attr = Some(attr.into());
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The raw `minlength` attribute, if any.
    pub fn minlength_attr(&self) -> Option<&str> {
        self.minlength_attr.as_deref()
    }

    /// Parse the declared constraints.
    ///
    /// Fails when the `minlength` attribute is not a non-negative integer.
    pub fn descriptor(&self) -> Result<FieldDescriptor> {
        let min_length = match self.minlength_attr.as_deref().map(str::trim) {
            None => None,
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                Error::malformed(&self.name, format!("minlength '{}' is not a number", raw))
            })?),
        };

        Ok(FieldDescriptor {
            required: self.required,
            min_length,
            kind: self.kind,
        })
    }

    /// Inline error text currently displayed next to the field.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Equivalent of the `aria-invalid` attribute.
    pub fn aria_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Display an inline error and flag the field invalid.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Remove the inline error and the invalid flag together.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The value this field contributes to a submission, if any.
    ///
    /// Unchecked checkboxes contribute nothing.
    pub fn submission_value(&self) -> Option<&str> {
        if self.kind == FieldKind::Checkbox && !self.checked {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Return the field to its blank state.
    pub fn reset(&mut self) {
        if self.kind.is_text_like() {
            self.value.clear();
        }
        self.checked = false;
        self.error = None;
    }
}
