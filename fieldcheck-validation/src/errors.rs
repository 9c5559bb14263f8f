// Validation errors

use std::fmt;

/// A single violated condition, before it is attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required,
    Email,
    Password,
    Gender,
    Date,
    /// String shorter than a `min=` bound
    LengthTooShort { value: String, min: i64 },
    /// String longer than a `max=` bound
    LengthTooLong { value: String, max: i64 },
    /// Integer below a `min=` bound
    RangeTooLow { value: i64, min: i64 },
    /// Integer above a `max=` bound
    RangeTooHigh { value: i64, max: i64 },
    /// Bad bound operand, or a value of the wrong type for the condition
    Malformed,
}

impl Violation {
    /// Name of the condition that failed.
    pub fn constraint(&self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::Email => "email",
            Violation::Password => "password",
            Violation::Gender => "gender",
            Violation::Date => "date",
            Violation::LengthTooShort { .. } | Violation::RangeTooLow { .. } => "min",
            Violation::LengthTooLong { .. } | Violation::RangeTooHigh { .. } => "max",
            Violation::Malformed => "malformed",
        }
    }

    /// The offending value, for the bound violations that report it.
    pub fn value(&self) -> Option<String> {
        match self {
            Violation::LengthTooShort { value, .. } | Violation::LengthTooLong { value, .. } => {
                Some(value.clone())
            }
            Violation::RangeTooLow { value, .. } | Violation::RangeTooHigh { value, .. } => {
                Some(value.to_string())
            }
            _ => None,
        }
    }

    /// Render the user-facing message for `field`.
    pub fn render(&self, field: &str) -> String {
        match self {
            Violation::Required => format!("field [{}] is required, but is missing", field),
            Violation::Email => format!("field [{}] should be a email", field),
            Violation::Password => format!(
                "field [{}] should be a valid password between 8 to 20 characters which contain \
                 at least one lowercase letter, one uppercase letter, one numeric digit, and one \
                 special character",
                field
            ),
            Violation::Gender => format!("field [{}] only accepts 'M' or 'F'", field),
            Violation::Date => format!("field [{}] should be in the format [dd.mm.yyyy]", field),
            Violation::LengthTooShort { value, min } => format!(
                "the field [{}] value [{}] has length shorter than required [{}]",
                field, value, min
            ),
            Violation::LengthTooLong { value, max } => format!(
                "the field [{}] value [{}] has length higher than required [{}]",
                field, value, max
            ),
            Violation::RangeTooLow { value, min } => format!(
                "the field [{}] value [{}] has range shorter than required [{}]",
                field, value, min
            ),
            Violation::RangeTooHigh { value, max } => format!(
                "the field [{}] value [{}] has range higher than required [{}]",
                field, value, max
            ),
            Violation::Malformed => format!("field [{}] validations malformed", field),
        }
    }
}

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Rendered message
    pub message: String,

    /// Validation constraint that failed
    pub constraint: String,

    /// Value that failed validation (optional)
    pub value: Option<String>,
}

impl ValidationError {
    /// Attach `violation` to `field`, rendering its message.
    pub fn from_violation(field: impl Into<String>, violation: &Violation) -> Self {
        let field = field.into();
        Self {
            message: violation.render(&field),
            constraint: violation.constraint().to_string(),
            value: violation.value(),
            field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Ordered collection of validation errors, one per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Rendered messages, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.errors.into_iter().map(|e| e.message).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
