// Type-keyed validators

use crate::patterns::{is_date, is_email, is_gender};
use crate::{Condition, FieldKind, FieldValue, PasswordPolicy, Validator, Violation};
use fieldcheck_log::{event, Level};

/// Check a `min=`/`max=` condition against a string's character length.
///
/// An empty string satisfies any bound; use `required` to demand a value.
/// Non-bound conditions pass through untouched.
pub fn check_length(condition: &Condition<'_>, value: &str) -> Result<(), Violation> {
    let length = value.chars().count() as i64;
    match *condition {
        Condition::Malformed(_) => Err(Violation::Malformed),
        _ if value.is_empty() => Ok(()),
        Condition::Min(min) if length < min => Err(Violation::LengthTooShort {
            value: value.to_string(),
            min,
        }),
        Condition::Max(max) if length > max => Err(Violation::LengthTooLong {
            value: value.to_string(),
            max,
        }),
        _ => Ok(()),
    }
}

/// Check a `min=`/`max=` condition against an integer.
pub fn check_range(condition: &Condition<'_>, value: i64) -> Result<(), Violation> {
    match *condition {
        Condition::Min(min) if value < min => Err(Violation::RangeTooLow { value, min }),
        Condition::Max(max) if value > max => Err(Violation::RangeTooHigh { value, max }),
        Condition::Malformed(_) => Err(Violation::Malformed),
        _ => Ok(()),
    }
}

fn check_password(value: &str) -> Result<(), Violation> {
    let report = PasswordPolicy::default().check(value);
    event!(
        Level::Debug,
        target: "fieldcheck::password",
        "password policy evaluated",
        special = report.special,
        digit = report.digit,
        uppercase = report.uppercase,
        lowercase = report.lowercase,
        correct_size = report.correct_size,
        whitespace = report.whitespace,
    );

    if report.is_strong() {
        Ok(())
    } else {
        Err(Violation::Password)
    }
}

/// Rules for string fields: `required`, `email`, `password`, `gender`,
/// `date`, `min=`, `max=`.
///
/// Everything except `required` and the bounds passes on an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringValidator;

impl Validator for StringValidator {
    fn validate(&self, conditions: &[Condition<'_>], value: &FieldValue<'_>) -> Result<(), Violation> {
        let FieldValue::Str(text) = *value else {
            return type_mismatch(conditions);
        };

        for condition in conditions {
            match condition {
                Condition::Required if text.is_empty() => return Err(Violation::Required),
                Condition::Email if !text.is_empty() && !is_email(text) => {
                    return Err(Violation::Email);
                }
                Condition::Password if !text.is_empty() => check_password(text)?,
                Condition::Gender if !text.is_empty() && !is_gender(text) => {
                    return Err(Violation::Gender);
                }
                Condition::Date if !text.is_empty() && !is_date(text) => {
                    return Err(Violation::Date);
                }
                bound if bound.is_bound() => check_length(bound, text)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "string"
    }
}

/// Rules for integer fields: `min=` and `max=`. Other tokens are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberValidator;

impl Validator for NumberValidator {
    fn validate(&self, conditions: &[Condition<'_>], value: &FieldValue<'_>) -> Result<(), Violation> {
        for condition in conditions.iter().filter(|c| c.is_bound()) {
            let FieldValue::Int(number) = *value else {
                return Err(Violation::Malformed);
            };
            check_range(condition, number)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "number"
    }
}

/// Presence-only rules for every other type: `required` fails on an absent
/// value, everything else is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValidator;

impl Validator for DefaultValidator {
    fn validate(&self, conditions: &[Condition<'_>], value: &FieldValue<'_>) -> Result<(), Violation> {
        let required = conditions.iter().any(|c| *c == Condition::Required);
        if required && value.is_absent() {
            return Err(Violation::Required);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

// String rules met a non-string value: the first condition the string
// validator would act on is reported as malformed.
fn type_mismatch(conditions: &[Condition<'_>]) -> Result<(), Violation> {
    if conditions
        .iter()
        .any(|c| !matches!(c, Condition::Unrecognized(_)))
    {
        Err(Violation::Malformed)
    } else {
        Ok(())
    }
}

/// The closed set of rule strategies, selected by field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    String(StringValidator),
    Number(NumberValidator),
    Default(DefaultValidator),
}

impl RuleSet {
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => RuleSet::String(StringValidator),
            FieldKind::Int => RuleSet::Number(NumberValidator),
            FieldKind::Other => RuleSet::Default(DefaultValidator),
        }
    }

    /// Select by type name: `"string"`, `"int"`, or the default rules.
    pub fn for_type_name(type_name: &str) -> Self {
        Self::for_kind(FieldKind::from_type_name(type_name))
    }
}

impl Validator for RuleSet {
    fn validate(&self, conditions: &[Condition<'_>], value: &FieldValue<'_>) -> Result<(), Violation> {
        match self {
            RuleSet::String(v) => v.validate(conditions, value),
            RuleSet::Number(v) => v.validate(conditions, value),
            RuleSet::Default(v) => v.validate(conditions, value),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RuleSet::String(v) => v.name(),
            RuleSet::Number(v) => v.name(),
            RuleSet::Default(v) => v.name(),
        }
    }
}
