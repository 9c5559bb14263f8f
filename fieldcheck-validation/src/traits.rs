// Validation traits and record descriptors

use crate::{Condition, ValidationErrors, Violation};

/// Trait for validatable types
pub trait Validate {
    /// Validate every annotated field, collecting one error per failing field.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// A rule-set strategy: evaluates a field's conditions against its value.
///
/// Conditions are evaluated in order and the first violation is returned.
pub trait Validator: Send + Sync {
    fn validate(&self, conditions: &[Condition<'_>], value: &FieldValue<'_>) -> Result<(), Violation>;

    /// Get validator name
    fn name(&self) -> &'static str;
}

/// Declared type of a record field, as far as rule dispatch cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Int,
    /// Anything else; only presence is checked.
    Other,
}

impl FieldKind {
    /// Map a type name onto a kind: `"string"`, `"int"`, anything else.
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "string" => FieldKind::String,
            "int" => FieldKind::Int,
            _ => FieldKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Int => "int",
            FieldKind::Other => "other",
        }
    }
}

/// Runtime value of a field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Other { present: bool },
}

impl FieldValue<'_> {
    /// A present value of some unmodelled type.
    pub const PRESENT: FieldValue<'static> = FieldValue::Other { present: true };

    /// An absent value (e.g. `None`).
    pub const ABSENT: FieldValue<'static> = FieldValue::Other { present: false };

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Other { present: false })
    }

    /// Presence of an optional value.
    pub fn presence<T>(value: &Option<T>) -> FieldValue<'static> {
        FieldValue::Other {
            present: value.is_some(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Str(value.as_str())
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue<'_> {
                fn from(value: $ty) -> Self {
                    FieldValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

/// Describes one field of a record type: its name, declared kind, rule
/// annotation and how to read its value.
pub struct FieldDescriptor<R> {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Comma-separated condition tokens; empty means "not validated".
    pub rules: &'static str,
    pub accessor: fn(&R) -> FieldValue<'_>,
}

impl<R> FieldDescriptor<R> {
    /// Read this field's value from `record`.
    pub fn value<'r>(&self, record: &'r R) -> FieldValue<'r> {
        (self.accessor)(record)
    }
}

impl<R> Clone for FieldDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldDescriptor<R> {}

impl<R> std::fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("rules", &self.rules)
            .finish()
    }
}

/// A record type with a static table of field descriptors, in declaration
/// order.
///
/// Usually derived; a hand-written impl keeps the table in a `static`:
///
/// ```
/// use fieldcheck_validation::{body_request, FieldDescriptor, FieldKind, FieldValue, Record};
///
/// struct Login {
///     email: String,
///     attempts: i32,
/// }
///
/// fn email(login: &Login) -> FieldValue<'_> {
///     FieldValue::from(&login.email)
/// }
///
/// fn attempts(login: &Login) -> FieldValue<'_> {
///     FieldValue::from(login.attempts)
/// }
///
/// impl Record for Login {
///     fn descriptors() -> &'static [FieldDescriptor<Self>] {
///         static FIELDS: [FieldDescriptor<Login>; 2] = [
///             FieldDescriptor { name: "Email", kind: FieldKind::String, rules: "required,email", accessor: email },
///             FieldDescriptor { name: "Attempts", kind: FieldKind::Int, rules: "max=3", accessor: attempts },
///         ];
///         &FIELDS
///     }
/// }
///
/// let login = Login { email: "jane@example.com".into(), attempts: 5 };
/// assert_eq!(
///     body_request(&login),
///     vec!["the field [Attempts] value [5] has range higher than required [3]".to_string()]
/// );
/// ```
pub trait Record: Sized + 'static {
    fn descriptors() -> &'static [FieldDescriptor<Self>];
}
