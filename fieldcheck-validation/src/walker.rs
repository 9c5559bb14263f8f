// Record walker

use crate::{
    parse_annotation, Condition, FieldDescriptor, FieldKind, FieldValue, Record, RuleSet,
    ValidationError, ValidationErrors, Validator, Violation,
};
use fieldcheck_log::{event, trace, warn, Level};

/// Evaluate one rule annotation against a value of the given kind.
///
/// Tokens are parsed on every call. Returns the first violation.
///
/// ```
/// use fieldcheck_validation::{check_value, FieldKind, FieldValue, Violation};
///
/// assert!(check_value(FieldKind::Int, "min=3", FieldValue::Int(3)).is_ok());
/// assert_eq!(
///     check_value(FieldKind::String, "required", FieldValue::Str("")),
///     Err(Violation::Required)
/// );
/// ```
pub fn check_value(kind: FieldKind, rules: &str, value: FieldValue<'_>) -> Result<(), Violation> {
    let conditions = parse_annotation(rules);
    if conditions.is_empty() {
        return Ok(());
    }
    RuleSet::for_kind(kind).validate(&conditions, &value)
}

/// Validate a single field of `record`.
///
/// Returns `None` when the field has no conditions or satisfies all of them.
pub fn validate_field<R>(record: &R, descriptor: &FieldDescriptor<R>) -> Option<ValidationError> {
    let conditions = parse_annotation(descriptor.rules);
    if conditions.is_empty() {
        return None;
    }

    for condition in &conditions {
        if let Condition::Unrecognized(token) = condition {
            warn!(
                target: "fieldcheck::walker",
                "field [{}] has unrecognized condition [{}], ignoring it",
                descriptor.name,
                token
            );
        }
    }

    let rules = RuleSet::for_kind(descriptor.kind);
    trace!(
        target: "fieldcheck::walker",
        "validating field [{}] with {} rules ({} conditions)",
        descriptor.name,
        rules.name(),
        conditions.len()
    );

    let violation = rules
        .validate(&conditions, &descriptor.value(record))
        .err()?;

    event!(
        Level::Debug,
        target: "fieldcheck::walker",
        "field failed validation",
        field = descriptor.name,
        constraint = violation.constraint(),
    );
    Some(ValidationError::from_violation(descriptor.name, &violation))
}

/// Validate every annotated field of `record`, in declaration order.
///
/// One error per failing field; a failure never stops the walk.
pub fn validate_record<R: Record>(record: &R) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for descriptor in R::descriptors() {
        if let Some(error) = validate_field(record, descriptor) {
            errors.add(error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate `record` and return only the rendered messages.
///
/// An empty vector means the record is valid.
pub fn body_request<R: Record>(record: &R) -> Vec<String> {
    match validate_record(record) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.into_messages(),
    }
}
