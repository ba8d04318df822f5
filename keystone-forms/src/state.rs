//! Submission lifecycle types.

use thiserror::Error;

/// Where a form is in its submission lifecycle.
///
/// `Idle -> Submitting -> {Succeeded, Failed} -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Submitting) | (Submitting, Succeeded) | (Submitting, Failed) | (Succeeded, Idle) | (Failed, Idle)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

/// Why a submission that reached the network did not succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitFailure {
    /// No response arrived.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server rejected submission ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Result of one submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission for this form was already in flight.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    Succeeded,
    Failed(SubmitFailure),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }

    /// Whether a network call was made for this trigger.
    pub fn was_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded | SubmitOutcome::Failed(_))
    }
}

/// The submit action that triggered a submission.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default navigation for this submit action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        use SubmissionState::*;
        assert!(Idle.can_transition_to(Submitting));
        assert!(Submitting.can_transition_to(Failed));
        assert!(Succeeded.can_transition_to(Idle));
        assert!(!Idle.can_transition_to(Succeeded));
        assert!(!Submitting.can_transition_to(Submitting));
        assert!(!Failed.can_transition_to(Submitting));
    }

    #[test]
    fn test_outcome_flags() {
        assert!(SubmitOutcome::Succeeded.was_sent());
        assert!(SubmitOutcome::Failed(SubmitFailure::Transport("refused".into())).was_sent());
        assert!(!SubmitOutcome::Ignored.was_sent());
        assert!(!SubmitOutcome::Invalid.is_success());
    }
}
