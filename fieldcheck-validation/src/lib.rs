//! Annotation-driven field validation
//!
//! Every field of a record may carry a rule annotation, a comma-separated
//! list of condition tokens:
//!
//! | token | applies to | fails when |
//! |---|---|---|
//! | `required` | strings, other types | empty string / absent value |
//! | `email` | strings | non-empty and not an email address |
//! | `password` | strings | non-empty and not a strong password |
//! | `gender` | strings | non-empty and not `M`/`F` |
//! | `date` | strings | non-empty and not `dd.mm.yyyy` |
//! | `min=N`, `max=N` | strings (length), integers (value) | out of bounds |
//!
//! The walker dispatches each field to a [`RuleSet`] chosen by its
//! [`FieldKind`], stops at the first violation of that field, and carries on
//! with the next field. The outcome is an ordered list of messages such as
//! `field [Email] should be a email`.
//!
//! # Examples
//!
//! ## Checking a single value
//!
//! ```
//! use fieldcheck_validation::{check_value, FieldKind, FieldValue};
//!
//! assert!(check_value(FieldKind::String, "required,email", FieldValue::Str("jo@example.com")).is_ok());
//! assert!(check_value(FieldKind::Int, "max=6", FieldValue::Int(7)).is_err());
//! ```
//!
//! ## Password policy
//!
//! ```
//! use fieldcheck_validation::is_strong_password;
//!
//! assert!(is_strong_password("P@ssw0rdStrong"));
//! assert!(!is_strong_password("week"));
//! ```
//!
//! Whole records implement [`Record`], by hand or with the derive macro
//! re-exported by the `fieldcheck` crate.

mod condition;
mod errors;
mod password;
mod patterns;
mod pipe;
mod traits;
mod validators;
mod walker;

pub use condition::*;
pub use errors::*;
pub use password::*;
pub use patterns::{is_date, is_email, is_gender};
pub use pipe::*;
pub use traits::*;
pub use validators::*;
pub use walker::*;
