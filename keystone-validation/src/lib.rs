//! Validation for Keystone site forms
//!
//! Three layers, leaf first:
//!
//! - **Rule engine**: pure predicates such as [`is_valid_email`] and
//!   [`is_valid_phone`], and the rule validators built on them.
//! - **Field validator**: runs a field's rule chain, stops at the first
//!   failure, and shows or clears the inline message.
//! - **Form validator**: validates every required field and aggregates a
//!   single pass/fail. The silent mode decides validity without displaying
//!   anything, for keeping the submit control in sync while the user types.
//!
//! # Examples
//!
//! ## Validating a field
//!
//! ```
//! use keystone_core::FormField;
//! use keystone_validation::FieldValidator;
//!
//! let mut email = FormField::email("email").required().with_value("not-an-email");
//!
//! assert!(!FieldValidator::validate(&mut email, true));
//! assert_eq!(email.error(), Some("Please enter a valid email address"));
//! assert!(email.aria_invalid());
//! ```
//!
//! ## Validating a form
//!
//! ```
//! use keystone_core::{Form, FormField};
//! use keystone_validation::FormValidator;
//!
//! let mut form = Form::new("contact", "/f/contact")
//!     .field(FormField::text("name").required())
//!     .field(FormField::tel("phone").required().with_value("(555) 123-4567"));
//!
//! // Silent: no messages rendered
//! assert!(!FormValidator::validate(Some(&mut form), false));
//! assert!(form.get("name").unwrap().error().is_none());
//!
//! form.get_mut("name").unwrap().set_value("Grace");
//! assert!(FormValidator::validate(Some(&mut form), true));
//! ```

mod errors;
mod field;
mod form;
mod rules;
mod validators;

pub use errors::*;
pub use field::*;
pub use form::*;
pub use rules::*;
pub use validators::*;
