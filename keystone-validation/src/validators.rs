// Rule engine: pure predicates and the validators built on them

use crate::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive; `a@b..c` passes.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").unwrap());

static PHONE_FORMATTING: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-().]").unwrap());

/// Minimum number of characters (digits plus an optional `+`) in a phone number.
pub const MIN_PHONE_LENGTH: usize = 10;

/// The value a rule looks at: text, or the checked state of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checkbox(bool),
}

/// True iff the trimmed text is non-empty, or the checkbox is checked.
pub fn is_required_satisfied(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => !text.trim().is_empty(),
        FieldValue::Checkbox(checked) => checked,
    }
}

/// True iff the trimmed value has at least `min` characters.
///
/// Empty values pass; requiredness is a separate rule.
pub fn is_min_length_satisfied(value: &str, min: usize) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.chars().count() >= min
}

/// Loose `local@domain.tld` shape check. Empty input is invalid.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Remove whitespace, hyphens, parentheses and dots.
pub fn strip_phone_formatting(value: &str) -> String {
    PHONE_FORMATTING.replace_all(value, "").into_owned()
}

/// E.164-ish check on the digits left after stripping formatting.
///
/// No leading zero, optional leading `+`, at most 16 digits, and at least
/// [`MIN_PHONE_LENGTH`] characters.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = strip_phone_formatting(value);
    PHONE_REGEX.is_match(&digits) && digits.len() >= MIN_PHONE_LENGTH
}

/// Required fields must not be blank
pub struct Required;

impl Required {
    pub const MESSAGE: &'static str = "This field is required";

    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if is_required_satisfied(FieldValue::Text(value)) {
            Ok(())
        } else {
            Err(ValidationError::new(field, Self::MESSAGE).with_constraint("required"))
        }
    }
}

/// Validates minimum length of non-empty values
pub struct MinLength(pub usize);

impl MinLength {
    pub fn message(&self) -> String {
        format!("Minimum {} characters required", self.0)
    }

    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if is_min_length_satisfied(value, self.0) {
            Ok(())
        } else {
            Err(ValidationError::new(field, self.message())
                .with_constraint("minLength")
                .with_value(value))
        }
    }
}

/// Validates email format of non-empty values
pub struct IsEmail;

impl IsEmail {
    pub const MESSAGE: &'static str = "Please enter a valid email address";

    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.is_empty() || is_valid_email(value) {
            Ok(())
        } else {
            Err(ValidationError::new(field, Self::MESSAGE)
                .with_constraint("isEmail")
                .with_value(value))
        }
    }
}

/// Validates phone format of non-empty values
pub struct IsPhone;

impl IsPhone {
    pub const MESSAGE: &'static str = "Please enter a valid phone number";

    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.is_empty() || is_valid_phone(value) {
            Ok(())
        } else {
            Err(ValidationError::new(field, Self::MESSAGE)
                .with_constraint("isPhone")
                .with_value(value))
        }
    }
}

/// Required checkboxes must be checked
pub struct MustAgree;

impl MustAgree {
    pub const MESSAGE: &'static str = "You must agree to this";

    pub fn validate(checked: bool, field: &str) -> Result<(), ValidationError> {
        if is_required_satisfied(FieldValue::Checkbox(checked)) {
            Ok(())
        } else {
            Err(ValidationError::new(field, Self::MESSAGE).with_constraint("mustAgree"))
        }
    }
}
