use crate::patterns::{ANGLE_BRACKET, CONTENT_BLOCK, EVENT_HANDLER, SCRIPT_PROTOCOL};
use serde_json::Value;

/// Strips a fixed denylist from user input before it leaves the client.
///
/// Removes script/style blocks, then every `<` and `>`, `javascript:` and
/// inline `on...=` handlers, then trims. Text between brackets is kept. The removals are repeated until
/// the text stops changing, so a removal can never splice together a new
/// match and sanitizing twice gives the same result as sanitizing once.
///
/// This is a best-effort denylist. It is not an HTML encoder and does not
/// make a value safe to render; endpoints must still escape on output.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSanitizer;

impl InputSanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Sanitize a text value.
    pub fn sanitize(&self, input: &str) -> String {
        let mut current = input.to_string();
        loop {
            let next = Self::pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Sanitize an arbitrary JSON value. Anything but a string yields `""`.
    pub fn sanitize_value(&self, input: &Value) -> String {
        match input {
            Value::String(s) => self.sanitize(s),
            _ => String::new(),
        }
    }

    /// Sanitize an optional value. `None` yields `""`.
    pub fn sanitize_opt(&self, input: Option<&str>) -> String {
        input.map(|s| self.sanitize(s)).unwrap_or_default()
    }

    fn pass(input: &str) -> String {
        let mut text = input.to_string();
        // Blocks first, before their brackets are gone.
        while CONTENT_BLOCK.is_match(&text) {
            text = CONTENT_BLOCK.replace_all(&text, "").into_owned();
        }
        for pattern in [&*ANGLE_BRACKET, &*SCRIPT_PROTOCOL, &*EVENT_HANDLER] {
            if pattern.is_match(&text) {
                text = pattern.replace_all(&text, "").into_owned();
            }
        }
        text.trim().to_string()
    }
}
