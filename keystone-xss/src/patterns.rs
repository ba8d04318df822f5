// Denylist patterns

use once_cell::sync::Lazy;
use regex::Regex;

/// `<script>` and `<style>` elements together with their content.
pub(crate) static CONTENT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap()
});

pub(crate) static ANGLE_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").unwrap());

pub(crate) static SCRIPT_PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").unwrap());

pub(crate) static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)on\w+=").unwrap());

/// Any trace of markup; used for detection only.
pub(crate) static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").unwrap());
