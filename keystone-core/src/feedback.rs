//! Submit control and form-scoped feedback banners.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default lifetime of a feedback banner.
pub const DEFAULT_FEEDBACK_TTL: Duration = Duration::from_millis(5000);

/// The button that submits a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    disabled: bool,
    busy: bool,
}

impl SubmitControl {
    /// Create an enabled, idle control.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            busy: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether a submission is in flight (label replaced, busy indicator shown).
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Enter the busy state and return the label that was displayed before.
    pub fn begin_busy(&mut self, busy_label: &str) -> String {
        self.busy = true;
        self.disabled = true;
        std::mem::replace(&mut self.label, busy_label.to_string())
    }

    /// Leave the busy state, restoring the captured label.
    ///
    /// The disabled flag is left alone; the caller decides it from a fresh
    /// validation pass.
    pub fn end_busy(&mut self, original_label: String) {
        self.busy = false;
        self.label = original_label;
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new("Submit")
    }
}

/// Outcome category of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// How assistive technology announces a banner on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaLive {
    /// `role="status"`, announced when the user is idle.
    Polite,
    /// `role="alert"`, announced immediately.
    Assertive,
}

impl AriaLive {
    pub fn role(&self) -> &'static str {
        match self {
            AriaLive::Polite => "status",
            AriaLive::Assertive => "alert",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AriaLive::Polite => "polite",
            AriaLive::Assertive => "assertive",
        }
    }
}

/// A banner shown next to a form after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    id: u64,
    text: String,
    kind: FeedbackKind,
    expires_after: Duration,
}

impl FeedbackMessage {
    pub(crate) fn new(id: u64, text: String, kind: FeedbackKind, expires_after: Duration) -> Self {
        Self {
            id,
            text,
            kind,
            expires_after,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    pub fn expires_after(&self) -> Duration {
        self.expires_after
    }

    pub fn live(&self) -> AriaLive {
        match self.kind {
            FeedbackKind::Success => AriaLive::Polite,
            FeedbackKind::Error => AriaLive::Assertive,
        }
    }
}
