//! # Keystone Forms
//!
//! Submission handling and live field wiring for site forms.
//!
//! A [`SubmissionController`] owns one form's submit lifecycle:
//! validate with messages shown, sanitize every value, transmit through a
//! [`Transport`], then report the outcome with a self-clearing banner. A
//! [`FormBinding`] keeps inline messages and the submit control in step
//! with the user's edits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use keystone_core::{Form, FormField};
//! use keystone_forms::{FormBinding, FormCopy, SubmissionController, SubmitEvent, shared};
//! use keystone_http_client::{HttpClient, HttpClientConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let form = shared(
//!         Form::new("contact", "https://forms.example.org/f/contact")
//!             .field(FormField::text("name").required().min_length(2))
//!             .field(FormField::email("email").required())
//!             .submit_label("Send Message"),
//!     );
//!
//!     let binding = FormBinding::attach(form.clone());
//!     binding.on_input("name", "Ada");
//!     binding.on_input("email", "ada@example.org");
//!
//!     let client = Arc::new(HttpClient::new(HttpClientConfig::default())?);
//!     let controller = SubmissionController::new(form, client, FormCopy::contact());
//!     let outcome = controller.submit(&mut SubmitEvent::new()).await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

use keystone_core::Form;
use parking_lot::Mutex;
use std::sync::Arc;

mod binding;
mod controller;
mod copy;
mod error_body;
mod feedback;
mod payload;
mod state;

pub use binding::FormBinding;
pub use controller::SubmissionController;
pub use copy::{FormCopy, FormFlow, INVALID_FORM_MESSAGE, NETWORK_ERROR_MESSAGE, SENDING_LABEL};
pub use error_body::{ErrorBody, ErrorEntry, failure_message};
pub use feedback::announce;
pub use payload::build_request;
pub use state::{SubmissionState, SubmitEvent, SubmitFailure, SubmitOutcome};

pub use keystone_http_client::Transport;

/// A form instance shared between its controller, its binding and banner
/// timers. Never lock it across an `.await`.
pub type SharedForm = Arc<Mutex<Form>>;

/// Wrap a form for sharing.
pub fn shared(form: Form) -> SharedForm {
    Arc::new(Mutex::new(form))
}
