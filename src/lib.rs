// fieldcheck - declarative validation of request records
//
// Annotate struct fields with condition tokens, derive `Validate`, and get
// back one human-readable message per failing field.

//! # Example
//!
//! ```
//! use fieldcheck::{body_request, Validate};
//!
//! #[derive(Validate)]
//! struct SignupRequest {
//!     #[validate("required,email", name = "Email")]
//!     email: String,
//!     #[validate("required,password", name = "Password")]
//!     password: String,
//!     #[validate("min=18", name = "Age")]
//!     age: i32,
//!     #[validate("gender", name = "Gender")]
//!     gender: String,
//! }
//!
//! let request = SignupRequest {
//!     email: "jane@example.com".into(),
//!     password: "P@ssw0rdStrong".into(),
//!     age: 17,
//!     gender: "F".into(),
//! };
//!
//! assert_eq!(
//!     body_request(&request),
//!     vec!["the field [Age] value [17] has range shorter than required [18]".to_string()]
//! );
//! assert!(request.validate().is_err());
//! ```

// Re-export the validation API
pub use fieldcheck_validation::*;

// Re-export the derive macro
pub use fieldcheck_macro::Validate;

// Re-export logging
pub use fieldcheck_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FieldDescriptor, FieldKind, FieldValue, Record, Validate, ValidationError,
        ValidationErrors, ValidationPipe, body_request, validate_record,
    };
}
