use crate::patterns::{EVENT_HANDLER, MARKUP, SCRIPT_PROTOCOL};
use serde::Serialize;

/// A denylist category found in a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finding {
    /// Tags, script/style blocks or stray angle brackets
    Markup,
    /// `javascript:` URLs
    ScriptProtocol,
    /// Inline handlers such as `onclick=`
    EventHandler,
}

impl Finding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Finding::Markup => "markup",
            Finding::ScriptProtocol => "script_protocol",
            Finding::EventHandler => "event_handler",
        }
    }
}

/// Report which denylist categories occur in `text`, in a fixed order.
pub fn detect(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    if MARKUP.is_match(text) {
        findings.push(Finding::Markup);
    }
    if SCRIPT_PROTOCOL.is_match(text) {
        findings.push(Finding::ScriptProtocol);
    }
    if EVENT_HANDLER.is_match(text) {
        findings.push(Finding::EventHandler);
    }
    findings
}

/// True when nothing on the denylist occurs in `text`.
pub fn is_clean(text: &str) -> bool {
    detect(text).is_empty()
}
