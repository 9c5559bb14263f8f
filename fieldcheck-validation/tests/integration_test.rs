//! Integration tests for fieldcheck-validation

use fieldcheck_validation::*;

/// Declares a record with hand-written descriptors:
/// `record!(Name { field: Type => (Label, Kind, "rules", |r| value) })`.
macro_rules! record {
    ($name:ident { $($field:ident : $ty:ty => ($label:literal, $kind:ident, $rules:literal, $get:expr)),* $(,)? }) => {
        #[allow(dead_code)]
        struct $name {
            $($field: $ty),*
        }

        impl Record for $name {
            fn descriptors() -> &'static [FieldDescriptor<Self>] {
                static FIELDS: &[FieldDescriptor<$name>] = &[
                    $(FieldDescriptor {
                        name: $label,
                        kind: FieldKind::$kind,
                        rules: $rules,
                        accessor: $get,
                    }),*
                ];
                FIELDS
            }
        }
    };
}

fn string_a(value: &RequestString) -> FieldValue<'_> {
    FieldValue::from(&value.a)
}

fn string_b(value: &RequestString) -> FieldValue<'_> {
    FieldValue::from(&value.b)
}

record!(RequestString {
    a: String => ("A", String, " required", string_a),
    b: String => ("B", String, "", string_b),
});

fn length_a(value: &RequestStringLength) -> FieldValue<'_> {
    FieldValue::from(&value.a)
}

record!(RequestStringLength {
    a: String => ("A", String, "min=11,max=12", length_a),
});

fn password_a(value: &RequestPassword) -> FieldValue<'_> {
    FieldValue::from(&value.a)
}

record!(RequestPassword {
    a: String => ("A", String, "password", password_a),
});

struct Embedded {
    #[allow(dead_code)]
    a: String,
}

fn object_a(_: &RequestObject) -> FieldValue<'_> {
    FieldValue::PRESENT
}

record!(RequestObject {
    a: Embedded => ("A", Other, "required", object_a),
});

fn min_a(value: &RequestNumberMin) -> FieldValue<'_> {
    FieldValue::from(value.a)
}

fn max_a(value: &RequestNumberMax) -> FieldValue<'_> {
    FieldValue::from(value.a)
}

record!(RequestNumberMin {
    a: i32 => ("A", Int, "min=3", min_a),
});

record!(RequestNumberMax {
    a: i32 => ("A", Int, "max=6", max_a),
});

fn malformed_name(value: &Malformed) -> FieldValue<'_> {
    FieldValue::from(&value.name)
}

fn malformed_count(value: &Malformed) -> FieldValue<'_> {
    FieldValue::from(value.count)
}

record!(Malformed {
    name: String => ("Name", String, "min=abc", malformed_name),
    count: i32 => ("Count", Int, "max=six", malformed_count),
});

fn sloppy_code(value: &Sloppy) -> FieldValue<'_> {
    FieldValue::from(&value.code)
}

record!(Sloppy {
    code: String => ("Code", String, "uuid,lowercase", sloppy_code),
});

fn password(a: &str) -> RequestPassword {
    RequestPassword { a: a.to_string() }
}

#[test]
fn test_string_required() {
    let ok = RequestString {
        a: "test".into(),
        b: String::new(),
    };
    assert!(body_request(&ok).is_empty());

    let missing = RequestString {
        a: String::new(),
        b: String::new(),
    };
    assert_eq!(
        body_request(&missing),
        vec!["field [A] is required, but is missing".to_string()]
    );
}

#[test]
fn test_string_length() {
    assert!(body_request(&RequestStringLength { a: "test_success".into() }).is_empty());
    assert!(body_request(&RequestStringLength { a: String::new() }).is_empty());

    assert_eq!(
        body_request(&RequestStringLength {
            a: "test_not_success_too_long".into()
        }),
        vec![
            "the field [A] value [test_not_success_too_long] has length higher than required [12]"
                .to_string()
        ]
    );
    assert_eq!(
        body_request(&RequestStringLength { a: "test_short".into() }),
        vec!["the field [A] value [test_short] has length shorter than required [11]".to_string()]
    );
}

#[test]
fn test_length_bound_edges() {
    // 10 and 13 characters sit just outside [11, 12]
    assert!(validate_record(&RequestStringLength { a: "a".repeat(10) }).is_err());
    assert!(validate_record(&RequestStringLength { a: "a".repeat(11) }).is_ok());
    assert!(validate_record(&RequestStringLength { a: "a".repeat(12) }).is_ok());
    assert!(validate_record(&RequestStringLength { a: "a".repeat(13) }).is_err());
}

#[test]
fn test_password_policy() {
    assert!(body_request(&password("P@ssw0rdStrong")).is_empty());

    for weak in [
        "week",
        "***************",
        "Password",
        "!0125583939193948_",
        "nouppercase!1",
        "NOLOWERCASE!1",
        "Nospecial1",
        "Nonumber@",
        "P@ss w0rdStrong",
        "P@ssw0rdtolongtofitonthevalidationP@ssw0rdtolongtofitonthevalidation",
    ] {
        let errors = validate_record(&password(weak)).unwrap_err();
        assert_eq!(errors.len(), 1, "{weak}");
        assert_eq!(errors.errors[0].constraint, "password", "{weak}");
    }
}

#[test]
fn test_object_required() {
    let record = RequestObject {
        a: Embedded { a: String::new() },
    };
    assert!(validate_record(&record).is_ok());
}

#[test]
fn test_integer_bounds() {
    assert!(body_request(&RequestNumberMin { a: 5 }).is_empty());
    assert!(body_request(&RequestNumberMin { a: 3 }).is_empty());
    assert_eq!(
        body_request(&RequestNumberMin { a: 2 }),
        vec!["the field [A] value [2] has range shorter than required [3]".to_string()]
    );

    assert!(body_request(&RequestNumberMax { a: 5 }).is_empty());
    assert!(body_request(&RequestNumberMax { a: 6 }).is_empty());
    assert_eq!(
        body_request(&RequestNumberMax { a: 7 }),
        vec!["the field [A] value [7] has range higher than required [6]".to_string()]
    );
}

#[test]
fn test_malformed_conditions() {
    let record = Malformed {
        name: "anything".into(),
        count: 1,
    };
    assert_eq!(
        body_request(&record),
        vec![
            "field [Name] validations malformed".to_string(),
            "field [Count] validations malformed".to_string(),
        ]
    );
}

#[test]
fn test_unrecognized_conditions_are_ignored() {
    assert!(validate_record(&Sloppy { code: "ABC".into() }).is_ok());
}

#[test]
fn test_errors_serialize() {
    let errors = validate_record(&RequestNumberMax { a: 9 }).unwrap_err();
    let json = errors.to_json();
    assert_eq!(json["errors"][0]["field"], "A");
    assert_eq!(json["errors"][0]["constraint"], "max");
    assert_eq!(json["errors"][0]["value"], "9");
}

#[test]
fn test_dispatch_by_type_name() {
    let conditions = parse_annotation("required,min=3");
    assert_eq!(
        RuleSet::for_type_name("string").validate(&conditions, &FieldValue::Str("")),
        Err(Violation::Required)
    );
    assert_eq!(
        RuleSet::for_type_name("int").validate(&conditions, &FieldValue::Int(1)),
        Err(Violation::RangeTooLow { value: 1, min: 3 })
    );
    assert!(RuleSet::for_type_name("Embedded")
        .validate(&conditions, &FieldValue::PRESENT)
        .is_ok());
}
