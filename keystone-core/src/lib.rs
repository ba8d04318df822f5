//! # Keystone Core
//!
//! The form model shared by every Keystone crate: forms, fields with their
//! constraint attributes, the submit control and form-scoped feedback banners.
//!
//! ```
//! use keystone_core::{Form, FormField};
//!
//! let form = Form::new("contact", "https://forms.example.org/f/contact")
//!     .field(FormField::text("name").required().min_length(2))
//!     .field(FormField::email("email").required())
//!     .field(FormField::tel("phone"))
//!     .submit_label("Send Message");
//!
//! assert_eq!(form.required_fields().count(), 2);
//! assert_eq!(form.submit_control().label(), "Send Message");
//! ```

mod error;
mod feedback;
mod field;
mod form;
pub mod logging;

pub use error::{Error, Result};
pub use feedback::{AriaLive, DEFAULT_FEEDBACK_TTL, FeedbackKind, FeedbackMessage, SubmitControl};
pub use field::{DEFAULT_CHECKBOX_VALUE, FieldDescriptor, FieldKind, FormField};
pub use form::Form;

// Re-export common types
pub use http::Method;
