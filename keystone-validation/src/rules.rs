// Ordered rule chain for a single field

use crate::{IsEmail, IsPhone, MinLength, MustAgree, Required, ValidationError};
use keystone_core::{FieldDescriptor, FieldKind};

/// A rule applicable to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    Email,
    Phone,
    MustAgree,
}

impl Rule {
    /// Evaluate the rule. `value` is already trimmed.
    fn check(&self, value: &str, checked: bool, field: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required => Required::validate(value, field),
            Rule::MinLength(min) => MinLength(*min).validate(value, field),
            Rule::Email => IsEmail::validate(value, field),
            Rule::Phone => IsPhone::validate(value, field),
            Rule::MustAgree => MustAgree::validate(checked, field),
        }
    }
}

/// The rules derived from a field's declared constraints, in evaluation order.
///
/// Evaluation stops at the first failure so only one message is ever shown
/// for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    field: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Build the chain: required, minimum length, email, phone, agreement.
    pub fn for_descriptor(field: impl Into<String>, descriptor: &FieldDescriptor) -> Self {
        let mut rules = Vec::new();
        let text_like = descriptor.kind.is_text_like();

        if descriptor.required && text_like {
            rules.push(Rule::Required);
        }
        if let Some(min) = descriptor.min_length
            && text_like
        {
            rules.push(Rule::MinLength(min));
        }
        match descriptor.kind {
            FieldKind::Email => rules.push(Rule::Email),
            FieldKind::Tel => rules.push(Rule::Phone),
            FieldKind::Checkbox if descriptor.required => rules.push(Rule::MustAgree),
            _ => {}
        }

        Self {
            field: field.into(),
            rules,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Return the first failing rule's error, if any.
    pub fn check(&self, value: &str, checked: bool) -> Result<(), ValidationError> {
        let value = value.trim();
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(value, checked, &self.field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: FieldKind, required: bool, min_length: Option<usize>) -> FieldDescriptor {
        FieldDescriptor {
            required,
            min_length,
            kind,
        }
    }

    #[test]
    fn test_chain_order() {
        let rules = FieldRules::for_descriptor("email", &descriptor(FieldKind::Email, true, Some(6)));
        assert_eq!(
            rules.rules(),
            &[Rule::Required, Rule::MinLength(6), Rule::Email]
        );
    }

    #[test]
    fn test_checkbox_chain() {
        let rules = FieldRules::for_descriptor("terms", &descriptor(FieldKind::Checkbox, true, None));
        assert_eq!(rules.rules(), &[Rule::MustAgree]);

        let optional = FieldRules::for_descriptor("news", &descriptor(FieldKind::Checkbox, false, None));
        assert!(optional.rules().is_empty());
    }

    #[test]
    fn test_first_failure_wins() {
        let rules = FieldRules::for_descriptor("email", &descriptor(FieldKind::Email, true, Some(10)));

        let err = rules.check("   ", false).unwrap_err();
        assert_eq!(err.message, "This field is required");

        let err = rules.check("a@b", false).unwrap_err();
        assert_eq!(err.message, "Minimum 10 characters required");

        let err = rules.check("not-an-email", false).unwrap_err();
        assert_eq!(err.message, "Please enter a valid email address");

        assert!(rules.check("  someone@example.org ", false).is_ok());
    }

    #[test]
    fn test_optional_tel_empty_passes() {
        let rules = FieldRules::for_descriptor("phone", &descriptor(FieldKind::Tel, false, None));
        assert!(rules.check("", false).is_ok());
        assert!(rules.check("12", false).is_err());
    }
}
