// Condition token parsing

use std::fmt;

/// One parsed condition token from a field's rule annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition<'a> {
    Required,
    Email,
    Password,
    Gender,
    Date,
    /// `min=N`
    Min(i64),
    /// `max=N`
    Max(i64),
    /// A `min=`/`max=` token whose operand is missing or not an integer.
    Malformed(&'a str),
    /// Anything outside the closed set. Evaluates as a no-op.
    Unrecognized(&'a str),
}

impl<'a> Condition<'a> {
    /// Parse a single token. Surrounding whitespace is ignored.
    pub fn parse(token: &'a str) -> Self {
        let token = token.trim();
        match token {
            "required" => Condition::Required,
            "email" => Condition::Email,
            "password" => Condition::Password,
            "gender" => Condition::Gender,
            "date" => Condition::Date,
            _ if token.contains("min=") || token.contains("max=") => Self::parse_bound(token),
            _ => Condition::Unrecognized(token),
        }
    }

    // The operand is checked before the key, so `xmin=abc` is malformed
    // while `xmin=3` is merely unrecognized.
    fn parse_bound(token: &'a str) -> Self {
        let mut parts = token.split('=');
        let key = parts.next().unwrap_or_default();
        let operand = match parts.next().map(str::parse::<i64>) {
            Some(Ok(operand)) => operand,
            _ => return Condition::Malformed(token),
        };

        match key {
            "min" => Condition::Min(operand),
            "max" => Condition::Max(operand),
            _ => Condition::Unrecognized(token),
        }
    }

    /// Whether this condition goes through bound checking.
    pub fn is_bound(&self) -> bool {
        matches!(
            self,
            Condition::Min(_) | Condition::Max(_) | Condition::Malformed(_)
        )
    }

    /// Constraint name used in errors and log records.
    pub fn name(&self) -> &'static str {
        match self {
            Condition::Required => "required",
            Condition::Email => "email",
            Condition::Password => "password",
            Condition::Gender => "gender",
            Condition::Date => "date",
            Condition::Min(_) => "min",
            Condition::Max(_) => "max",
            Condition::Malformed(_) => "malformed",
            Condition::Unrecognized(_) => "unrecognized",
        }
    }
}

impl fmt::Display for Condition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Min(n) => write!(f, "min={}", n),
            Condition::Max(n) => write!(f, "max={}", n),
            Condition::Malformed(token) | Condition::Unrecognized(token) => f.write_str(token),
            other => f.write_str(other.name()),
        }
    }
}

/// Split a rule annotation into conditions, in declaration order.
///
/// Empty tokens are dropped, so `""` and `" , "` both yield no conditions.
///
/// ```
/// use fieldcheck_validation::{parse_annotation, Condition};
///
/// assert_eq!(
///     parse_annotation("required, min=3"),
///     vec![Condition::Required, Condition::Min(3)]
/// );
/// assert!(parse_annotation("").is_empty());
/// ```
pub fn parse_annotation(annotation: &str) -> Vec<Condition<'_>> {
    annotation
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Condition::parse)
        .collect()
}
