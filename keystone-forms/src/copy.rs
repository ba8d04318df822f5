//! User-facing text for each submission flow.

use serde::{Deserialize, Serialize};

/// Shown when validation blocks a submission.
pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors before submitting.";

/// Shown when no response arrived at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your internet connection and try again.";

/// Label the submit control carries while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Which submission flow a form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFlow {
    Application,
    #[default]
    Contact,
}

impl FormFlow {
    pub fn copy(&self) -> FormCopy {
        match self {
            FormFlow::Application => FormCopy::application(),
            FormFlow::Contact => FormCopy::contact(),
        }
    }
}

/// Banner and label text used by a submission controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCopy {
    pub success: String,
    /// Fallback when the server rejects without a readable message
    pub failure: String,
    pub network_error: String,
    pub invalid: String,
    pub sending_label: String,
}

impl FormCopy {
    /// Copy for the housing application form.
    pub fn application() -> Self {
        Self::with_outcomes(
            "Application Submitted Successfully! We'll review your information and contact you within 2-3 business days.",
            "There was a problem submitting your application. Please try again.",
        )
    }

    /// Copy for the contact form.
    pub fn contact() -> Self {
        Self::with_outcomes(
            "Message Sent Successfully! Thank you for reaching out. We'll get back to you soon.",
            "Oops! There was a problem sending your message. Please try again.",
        )
    }

    /// Custom success and failure copy with the shared network, invalid and
    /// sending text.
    pub fn with_outcomes(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
            network_error: NETWORK_ERROR_MESSAGE.to_string(),
            invalid: INVALID_FORM_MESSAGE.to_string(),
            sending_label: SENDING_LABEL.to_string(),
        }
    }
}

impl Default for FormCopy {
    fn default() -> Self {
        Self::contact()
    }
}
