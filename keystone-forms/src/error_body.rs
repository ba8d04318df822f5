//! Best-effort reading of a rejected submission's JSON body.

use keystone_http_client::Response;
use serde::Deserialize;
use tracing::warn;

/// One entry of an `errors` list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorEntry {
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "errors": [{ "message": ... }] }` or `{ "error": "..." }`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<ErrorEntry>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// The user-facing message the body carries, if any.
    ///
    /// A non-empty `errors` list wins and its messages are joined with
    /// `", "`. Entries without a message are skipped.
    pub fn message(&self) -> Option<String> {
        let joined = self
            .errors
            .iter()
            .flatten()
            .filter_map(|entry| entry.message.as_deref())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        if !joined.is_empty() {
            return Some(joined);
        }
        self.error.clone().filter(|e| !e.is_empty())
    }
}

/// Banner text for a non-2xx response; `fallback` when the body says nothing
/// usable.
pub fn failure_message(form_id: &str, response: &Response, fallback: &str) -> String {
    match ErrorBody::parse(response.bytes()) {
        Ok(body) => body.message().unwrap_or_else(|| fallback.to_string()),
        Err(e) => {
            warn!(
                form = %form_id,
                status = response.status().as_u16(),
                error = %e,
                "Could not parse error response body"
            );
            fallback.to_string()
        }
    }
}
