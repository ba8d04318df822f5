//! Outgoing payload construction.

use keystone_core::Form;
use keystone_http_client::FormRequest;
use keystone_xss::{InputSanitizer, detect};
use tracing::warn;

/// Build the request for `form`: every contributing field, sanitized, keyed
/// by its name, sent to the form's action with the form's method.
pub fn build_request(form: &Form, sanitizer: &InputSanitizer) -> FormRequest {
    let fields = form.fields().iter().filter_map(|field| {
        let raw = field.submission_value()?;
        let findings = detect(raw);
        if !findings.is_empty() {
            let categories: Vec<_> = findings.iter().map(|f| f.as_str()).collect();
            warn!(
                form = %form.id(),
                field = %field.name(),
                stripped = ?categories,
                "Removed disallowed content from field"
            );
        }
        Some((field.name().to_string(), sanitizer.sanitize(raw)))
    });

    FormRequest::new(form.method().clone(), form.action()).fields(fields)
}
