//! # Keystone XSS
//!
//! Denylist sanitization of form values before they are transmitted.
//!
//! ```rust
//! use keystone_xss::InputSanitizer;
//!
//! let sanitizer = InputSanitizer::new();
//! assert_eq!(sanitizer.sanitize("<script>alert(1)</script>Hello"), "Hello");
//! assert_eq!(sanitizer.sanitize("  Ada <3 "), "Ada 3");
//! assert_eq!(sanitizer.sanitize_value(&serde_json::Value::Null), "");
//! ```
//!
//! ## Detection
//!
//! ```rust
//! use keystone_xss::{detect, Finding};
//!
//! assert_eq!(detect("<img src=x onerror=go()>"), vec![Finding::Markup, Finding::EventHandler]);
//! ```
//!
//! ## Limitations
//!
//! The sanitizer removes a fixed list of substrings. It is not a
//! context-aware encoder and cannot guarantee that a value is safe to render
//! as HTML. Whatever receives the submission must escape values on output.

pub mod detect;
mod patterns;
pub mod sanitizer;

pub use detect::{Finding, detect, is_clean};
pub use sanitizer::InputSanitizer;
