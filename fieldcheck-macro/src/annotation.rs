//! Compile-time checks for rule annotations.
//!
//! Only the shape of each token is checked here. Bound operands are parsed
//! at validation time, so `min=abc` compiles and reports a malformed rule.

/// Field kind as seen from the field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Int,
    /// `Option<_>`: presence is checked
    Optional,
    Other,
}

const KEYWORDS: [&str; 5] = ["required", "email", "password", "gender", "date"];

const STRING_ONLY: [&str; 4] = ["email", "password", "gender", "date"];

/// Validate an annotation against the field kind it is attached to.
pub fn check(kind: Kind, annotation: &str) -> Result<(), String> {
    for token in annotation.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token.contains("min=") || token.contains("max=") {
            continue;
        }

        if !KEYWORDS.contains(&token) {
            return Err(format!(
                "unrecognized validation condition `{}`\n\
                 hint: expected one of required, email, password, gender, date, min=N, max=N",
                token
            ));
        }

        if kind == Kind::Int && STRING_ONLY.contains(&token) {
            return Err(format!(
                "condition `{}` only applies to string fields\n\
                 hint: integer fields accept min=N and max=N",
                token
            ));
        }
    }
    Ok(())
}
