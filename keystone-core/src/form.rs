//! The form element: endpoint, fields, submit control and feedback banner.

use crate::{Error, FeedbackKind, FeedbackMessage, FormField, Result, SubmitControl};
use http::Method;
use std::time::Duration;

/// A form as exposed by page markup.
///
/// Each form instance owns its own state; nothing is shared between forms.
#[derive(Debug, Clone)]
pub struct Form {
    id: String,
    action: String,
    method: Method,
    fields: Vec<FormField>,
    submit: SubmitControl,
    feedback: Option<FeedbackMessage>,
    next_feedback_id: u64,
}

impl Form {
    /// Create a form posting to `action`.
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            method: Method::POST,
            fields: Vec::new(),
            submit: SubmitControl::default(),
            feedback: None,
            next_feedback_id: 1,
        }
    }

    /// Set the method from a `method` attribute. Unrecognised values keep POST.
    pub fn with_method_attr(mut self, attr: &str) -> Self {
        if let Ok(method) = Method::from_bytes(attr.trim().to_ascii_uppercase().as_bytes()) {
            self.method = method;
        }
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append a field.
    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the submit control's label.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit = SubmitControl::new(label);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Like [`Form::get_mut`], but an unknown name is an error.
    pub fn require_mut(&mut self, name: &str) -> Result<&mut FormField> {
        self.get_mut(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Every field carrying the `required` attribute.
    pub fn required_fields_mut(&mut self) -> impl Iterator<Item = &mut FormField> {
        self.fields.iter_mut().filter(|f| f.is_required())
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.is_required())
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn submit_control_mut(&mut self) -> &mut SubmitControl {
        &mut self.submit
    }

    /// Clear every field's value, checked state and error.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// The banner currently displayed, if any.
    pub fn feedback(&self) -> Option<&FeedbackMessage> {
        self.feedback.as_ref()
    }

    /// Insert a banner, replacing the previous one. Returns its id.
    pub fn show_feedback(
        &mut self,
        text: impl Into<String>,
        kind: FeedbackKind,
        expires_after: Duration,
    ) -> u64 {
        let id = self.next_feedback_id;
        self.next_feedback_id += 1;
        self.feedback = Some(FeedbackMessage::new(id, text.into(), kind, expires_after));
        id
    }

    /// Remove the banner if it is still the one identified by `id`.
    pub fn dismiss_feedback(&mut self, id: u64) -> bool {
        match &self.feedback {
            Some(current) if current.id() == id => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }
}
