//! Validate, sanitize, transmit and report for one form.

use crate::error_body::failure_message;
use crate::feedback::{announce, handle};
use crate::{FormCopy, SharedForm, SubmissionState, SubmitEvent, SubmitFailure, SubmitOutcome};
use keystone_core::{DEFAULT_FEEDBACK_TTL, FeedbackKind, Form};
use keystone_http_client::Transport;
use keystone_validation::FormValidator;
use keystone_xss::InputSanitizer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Owns the submission lifecycle of a single form.
///
/// At most one submission per form is in flight: the submit control's busy
/// flag is checked and set under the form lock, and only cleared once the
/// network call has resolved. The lock is never held across the network
/// call, so other fields and forms stay responsive while it runs.
pub struct SubmissionController {
    form: SharedForm,
    transport: Arc<dyn Transport>,
    sanitizer: InputSanitizer,
    copy: FormCopy,
    feedback_ttl: Duration,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    pub fn new(form: SharedForm, transport: Arc<dyn Transport>, copy: FormCopy) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            form,
            transport,
            sanitizer: InputSanitizer::new(),
            copy,
            feedback_ttl: DEFAULT_FEEDBACK_TTL,
            state,
        }
    }

    /// How long banners stay up.
    pub fn with_feedback_ttl(mut self, ttl: Duration) -> Self {
        self.feedback_ttl = ttl;
        self
    }

    pub fn form(&self) -> &SharedForm {
        &self.form
    }

    pub fn copy(&self) -> &FormCopy {
        &self.copy
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Watch lifecycle transitions.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Handle a submit trigger.
    ///
    /// Never fails: every outcome is reported on the form itself (inline
    /// messages or a banner) and returned for the caller's information. The
    /// submit control always ends up with its original label, enabled
    /// exactly when the form passes a silent validation pass.
    pub async fn submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let (request, in_flight) = {
            let mut form = self.form.lock();
            if form.submit_control().is_busy() {
                debug!(form = %form.id(), "Submission already in flight, ignoring trigger");
                return SubmitOutcome::Ignored;
            }

            if !FormValidator::validate(Some(&mut *form), true) {
                debug!(form = %form.id(), "Submission blocked by validation");
                self.banner(&mut form, &self.copy.invalid, FeedbackKind::Error);
                return SubmitOutcome::Invalid;
            }

            let request = crate::payload::build_request(&form, &self.sanitizer);
            info!(
                form = %form.id(),
                method = %request.method(),
                action = %request.url(),
                "Submitting form"
            );

            let original_label = form
                .submit_control_mut()
                .begin_busy(&self.copy.sending_label);
            self.transition(SubmissionState::Submitting);
            (request, InFlight::new(self, original_label))
        };

        let result = self.transport.send(request).await;

        let outcome = {
            let mut form = self.form.lock();
            let outcome = match result {
                Ok(response) if response.is_success() => {
                    info!(form = %form.id(), status = response.status().as_u16(), "Form submitted");
                    self.banner(&mut form, &self.copy.success, FeedbackKind::Success);
                    form.reset();
                    SubmitOutcome::Succeeded
                }
                Ok(response) => {
                    let status = response.status().as_u16();
                    let message = failure_message(form.id(), &response, &self.copy.failure);
                    warn!(form = %form.id(), status, "Server rejected submission");
                    self.banner(&mut form, &message, FeedbackKind::Error);
                    SubmitOutcome::Failed(SubmitFailure::Server { status, message })
                }
                Err(e) => {
                    error!(form = %form.id(), error = %e, "Form submission failed");
                    self.banner(&mut form, &self.copy.network_error, FeedbackKind::Error);
                    SubmitOutcome::Failed(SubmitFailure::Transport(e.to_string()))
                }
            };

            in_flight.settle(&mut form);
            outcome
        };

        self.transition(if outcome.is_success() {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        });
        self.transition(SubmissionState::Idle);
        outcome
    }

    fn banner(&self, form: &mut Form, text: &str, kind: FeedbackKind) {
        announce(form, handle(&self.form), text, kind, self.feedback_ttl);
    }

    fn transition(&self, next: SubmissionState) {
        let previous = self.state.send_replace(next);
        if !previous.can_transition_to(next) {
            warn!(from = previous.as_str(), to = next.as_str(), "Unexpected submission state change");
        } else {
            debug!(from = previous.as_str(), to = next.as_str(), "Submission state changed");
        }
    }
}

/// Holds the submit control while a request is outstanding.
///
/// If the submit future is dropped before the response is reported (a
/// timeout, a lost `select!` branch, an aborted task or a panicking
/// transport), the control gets its label back, stops being busy and the
/// lifecycle closes as failed, so the next trigger is accepted.
struct InFlight<'a> {
    controller: &'a SubmissionController,
    original_label: Option<String>,
}

impl<'a> InFlight<'a> {
    fn new(controller: &'a SubmissionController, original_label: String) -> Self {
        Self {
            controller,
            original_label: Some(original_label),
        }
    }

    /// Hand the control back once the response has been reported.
    fn settle(mut self, form: &mut Form) {
        if let Some(label) = self.original_label.take() {
            release_control(form, label);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let Some(label) = self.original_label.take() else {
            return;
        };
        {
            let mut form = self.controller.form.lock();
            warn!(form = %form.id(), "Submission abandoned before the server answered");
            release_control(&mut form, label);
        }
        self.controller.transition(SubmissionState::Failed);
        self.controller.transition(SubmissionState::Idle);
    }
}

/// Restore the label and enable the control exactly when the form is ready.
fn release_control(form: &mut Form, original_label: String) {
    form.submit_control_mut().end_busy(original_label);
    let ready = FormValidator::validate_silent(Some(&mut *form));
    form.submit_control_mut().set_disabled(!ready);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use keystone_core::FormField;
    use keystone_http_client::{FormRequest, HttpClientError, Response, StatusCode};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every request with a fixed status and body.
    struct Canned {
        status: StatusCode,
        body: serde_json::Value,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(status: StatusCode, body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, _request: FormRequest) -> keystone_http_client::Result<Response> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Response::json_body(self.status, &self.body))
        }
    }

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn send(&self, _request: FormRequest) -> keystone_http_client::Result<Response> {
            Err(HttpClientError::Connection("connection refused".into()))
        }
    }

    fn filled_contact() -> SharedForm {
        Arc::new(Mutex::new(
            Form::new("contact", "https://forms.example.org/f/contact")
                .field(FormField::text("name").required().min_length(2).with_value("Ada"))
                .field(FormField::email("email").required().with_value("ada@example.org"))
                .field(FormField::text("message").with_value("Hello"))
                .submit_label("Send Message"),
        ))
    }

    #[tokio::test]
    async fn test_prevents_default() {
        let controller = SubmissionController::new(
            filled_contact(),
            Canned::new(StatusCode::OK, json!({})),
            FormCopy::contact(),
        );
        let mut event = SubmitEvent::new();
        controller.submit(&mut event).await;
        assert!(event.default_prevented());
    }

    #[tokio::test]
    async fn test_invalid_form_not_sent() {
        let form = filled_contact();
        form.lock().get_mut("email").unwrap().set_value("nope");
        let transport = Canned::new(StatusCode::OK, json!({}));
        let controller = SubmissionController::new(form.clone(), transport.clone(), FormCopy::contact());

        let outcome = controller.submit(&mut SubmitEvent::new()).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        let form = form.lock();
        assert_eq!(
            form.feedback().map(|f| f.text()),
            Some("Please correct the errors before submitting.")
        );
        assert_eq!(
            form.get("email").unwrap().error(),
            Some("Please enter a valid email address")
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_success_resets_and_disables() {
        let form = filled_contact();
        let controller = SubmissionController::new(
            form.clone(),
            Canned::new(StatusCode::CREATED, json!({ "ok": true })),
            FormCopy::contact(),
        );

        let outcome = controller.submit(&mut SubmitEvent::new()).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        let form = form.lock();
        let banner = form.feedback().unwrap();
        assert!(banner.text().contains("Successfully"));
        assert_eq!(banner.kind(), FeedbackKind::Success);
        assert!(form.fields().iter().all(|f| f.value().is_empty()));
        assert!(form.fields().iter().all(|f| !f.aria_invalid()));
        assert!(form.submit_control().is_disabled());
        assert!(!form.submit_control().is_busy());
        assert_eq!(form.submit_control().label(), "Send Message");
    }

    #[tokio::test]
    async fn test_server_errors_shown() {
        let form = filled_contact();
        let controller = SubmissionController::new(
            form.clone(),
            Canned::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "errors": [{ "message": "Email already registered" }, { "message": "Try later" }] }),
            ),
            FormCopy::contact(),
        );

        let outcome = controller.submit(&mut SubmitEvent::new()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitFailure::Server {
                status: 422,
                message: "Email already registered, Try later".to_string(),
            })
        );
        let form = form.lock();
        assert_eq!(
            form.feedback().map(|f| f.text()),
            Some("Email already registered, Try later")
        );
        assert_eq!(form.get("name").unwrap().value(), "Ada");
        assert!(!form.submit_control().is_disabled());
    }

    #[tokio::test]
    async fn test_server_failure_without_body_uses_flow_copy() {
        let form = filled_contact();
        let controller = SubmissionController::new(
            form.clone(),
            Canned::new(StatusCode::INTERNAL_SERVER_ERROR, json!(null)),
            FormCopy::application(),
        );

        controller.submit(&mut SubmitEvent::new()).await;

        assert_eq!(
            form.lock().feedback().map(|f| f.text().to_string()),
            Some(FormCopy::application().failure)
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_retryable() {
        let form = filled_contact();
        let controller = SubmissionController::new(form.clone(), Arc::new(Unreachable), FormCopy::contact());

        let outcome = controller.submit(&mut SubmitEvent::new()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(SubmitFailure::Transport(_))));
        let form = form.lock();
        let banner = form.feedback().unwrap();
        assert_eq!(
            banner.text(),
            "Network error. Please check your internet connection and try again."
        );
        assert_eq!(banner.live().role(), "alert");
        assert_eq!(form.submit_control().label(), "Send Message");
        assert!(!form.submit_control().is_disabled());
        assert_eq!(form.get("email").unwrap().value(), "ada@example.org");
    }

    struct Panicking;

    #[async_trait]
    impl Transport for Panicking {
        async fn send(&self, _request: FormRequest) -> keystone_http_client::Result<Response> {
            panic!("transport blew up");
        }
    }

    #[tokio::test]
    async fn test_panicking_transport_releases_control() {
        let form = filled_contact();
        let controller = Arc::new(SubmissionController::new(
            form.clone(),
            Arc::new(Panicking),
            FormCopy::contact(),
        ));

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(&mut SubmitEvent::new()).await })
        };
        assert!(task.await.unwrap_err().is_panic());

        {
            let form = form.lock();
            assert_eq!(form.submit_control().label(), "Send Message");
            assert!(!form.submit_control().is_busy());
            assert!(!form.submit_control().is_disabled());
        }
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_uses_configured_ttl() {
        let form = filled_contact();
        let controller = SubmissionController::new(form.clone(), Arc::new(Unreachable), FormCopy::contact())
            .with_feedback_ttl(Duration::from_millis(200));

        controller.submit(&mut SubmitEvent::new()).await;
        assert!(form.lock().feedback().is_some());

        tokio::time::sleep(Duration::from_millis(201)).await;
        assert!(form.lock().feedback().is_none());
    }
}
