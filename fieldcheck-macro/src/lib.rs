// Procedural macros for fieldcheck records

use proc_macro::TokenStream;

mod annotation;
mod validate;

/// Derives `Record` and `Validate` for a struct with named fields.
///
/// Annotate fields with `#[validate("...")]`; an optional `name = "..."`
/// overrides the field name used in messages.
///
/// ```rust,ignore
/// use fieldcheck::Validate;
///
/// #[derive(Validate)]
/// struct SignupRequest {
///     #[validate("required,email", name = "Email")]
///     email: String,
///     #[validate("min=18")]
///     age: i32,
///     nickname: String,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn validate_derive(input: TokenStream) -> TokenStream {
    validate::validate_derive_impl(input)
}
