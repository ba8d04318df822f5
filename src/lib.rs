// Keystone - form validation and submission for site forms
//
// Validates fields against their declared constraints, sanitizes values
// before they leave, submits them asynchronously with at most one submission
// in flight per form, and keeps inline messages and the submit control in
// step with the user's edits.

// Re-export core functionality
pub use keystone_core::*;

pub use keystone_forms;
pub use keystone_http_client;
pub use keystone_validation;
pub use keystone_xss;

// Re-export optional crates
#[cfg(feature = "config")]
pub use keystone_config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{FeedbackKind, Form, FormField, Method};
    pub use keystone_forms::{
        FormBinding, FormCopy, FormFlow, SharedForm, SubmissionController, SubmissionState,
        SubmitEvent, SubmitFailure, SubmitOutcome, shared,
    };
    pub use keystone_http_client::{
        FormRequest, HttpClient, HttpClientConfig, Response, StatusCode, Transport,
    };
    pub use keystone_validation::{FieldValidator, FormValidator};
    pub use keystone_xss::InputSanitizer;

    #[cfg(feature = "config")]
    pub use keystone_config::{SiteConfig, load_dotenv};
}
