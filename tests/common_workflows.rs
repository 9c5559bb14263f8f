//! Integration tests for common fieldcheck workflows.
//!
//! Records here use `#[derive(Validate)]`, the way application code does.

use fieldcheck::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

// =============================================================================
// Records
// =============================================================================

#[derive(Validate)]
struct RequestString {
    #[validate(" required", name = "A")]
    a: String,
    #[allow(dead_code)]
    b: String,
}

#[derive(Validate)]
struct RequestStringLength {
    #[validate("min=11,max=12", name = "A")]
    a: String,
}

#[derive(Validate)]
struct RequestPassword {
    #[validate("password", name = "A")]
    a: String,
}

#[derive(Default)]
struct Embedded {
    #[allow(dead_code)]
    a: String,
}

#[derive(Validate)]
struct RequestObject {
    #[validate("required", name = "A")]
    #[allow(dead_code)]
    a: Embedded,
}

#[derive(Validate)]
struct RequestNumber {
    #[validate("min=3", name = "Min")]
    min: i32,
    #[validate("max=6", name = "Max")]
    max: u8,
}

#[derive(Debug, Clone, Deserialize, Validate)]
struct CreateUser {
    #[validate("required,email")]
    email: String,
    #[validate("required,password")]
    password: String,
    #[validate("required,min=2,max=20")]
    username: String,
    #[validate("date")]
    birthday: String,
    #[validate("gender")]
    gender: String,
    #[validate("min=0,max=130")]
    age: i64,
    #[validate("required")]
    referral: Option<String>,
    note: String,
}

#[derive(Validate)]
struct RawNames {
    #[validate("required")]
    r#type: &'static str,
}

#[derive(Validate)]
struct Unvalidated {
    #[allow(dead_code)]
    anything: String,
}

fn valid_user() -> CreateUser {
    CreateUser {
        email: "jane@example.com".into(),
        password: "P@ssw0rdStrong".into(),
        username: "jane".into(),
        birthday: "24.12.1990".into(),
        gender: "f".into(),
        age: 34,
        referral: Some("newsletter".into()),
        note: String::new(),
    }
}

// =============================================================================
// Walker behaviour
// =============================================================================

#[test]
fn test_required_string() {
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
    assert_eq!(body_request(&RequestStringLength { a: "test_short".into() }).len(), 1);
    assert_eq!(
        body_request(&RequestStringLength {
            a: "test_not_success_too_long".into()
        })
        .len(),
        1
    );
}

#[test]
fn test_password() {
    assert!(RequestPassword { a: "P@ssw0rdStrong".into() }.validate().is_ok());
    assert!(RequestPassword { a: "week".into() }.validate().is_err());
    assert!(RequestPassword { a: "Password".into() }.validate().is_err());
    assert!(RequestPassword { a: "*".repeat(15) }.validate().is_err());
    assert!(RequestPassword { a: "P@ssw0rd Strong".into() }.validate().is_err());
}

#[test]
fn test_object_is_always_present() {
    let record = RequestObject {
        a: Embedded::default(),
    };
    assert!(record.validate().is_ok());
}

#[test]
fn test_integer_bounds() {
    assert!(body_request(&RequestNumber { min: 3, max: 6 }).is_empty());
    assert_eq!(
        body_request(&RequestNumber { min: 2, max: 7 }),
        vec![
            "the field [Min] value [2] has range shorter than required [3]".to_string(),
            "the field [Max] value [7] has range higher than required [6]".to_string(),
        ]
    );
}

#[test]
fn test_valid_user() {
    assert!(valid_user().validate().is_ok());
}

#[test]
fn test_every_failing_field_is_reported_in_order() {
    let user = CreateUser {
        email: "not-an-email".into(),
        password: "week".into(),
        username: String::new(),
        birthday: "1990-12-24".into(),
        gender: "x".into(),
        age: 131,
        referral: None,
        note: "free text".into(),
    };

    let errors = user.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "email", "password", "username", "birthday", "gender", "age", "referral"
        ]
    );
    assert_eq!(
        errors.messages(),
        vec![
            "field [email] should be a email".to_string(),
            "field [password] should be a valid password between 8 to 20 characters which \
             contain at least one lowercase letter, one uppercase letter, one numeric digit, and \
             one special character"
                .to_string(),
            "field [username] is required, but is missing".to_string(),
            "field [birthday] should be in the format [dd.mm.yyyy]".to_string(),
            "field [gender] only accepts 'M' or 'F'".to_string(),
            "the field [age] value [131] has range higher than required [130]".to_string(),
            "field [referral] is required, but is missing".to_string(),
        ]
    );
}

#[test]
fn test_single_missing_required_field() {
    let mut user = valid_user();
    user.username = String::new();

    let messages = body_request(&user);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("[username]"));
}

#[test]
fn test_validation_is_idempotent() {
    let mut user = valid_user();
    user.email = "broken".into();
    user.age = -1;
    assert_eq!(body_request(&user), body_request(&user));
}

#[test]
fn test_raw_identifiers_use_plain_names() {
    let errors = RawNames { r#type: "" }.validate().unwrap_err();
    assert_eq!(errors.errors[0].field, "type");
}

#[test]
fn test_records_without_annotations() {
    assert!(Unvalidated {
        anything: String::new()
    }
    .validate()
    .is_ok());
}

#[test]
fn test_generated_descriptors() {
    let descriptors = CreateUser::descriptors();
    assert_eq!(descriptors.len(), 8);
    assert_eq!(descriptors[0].name, "email");
    assert_eq!(descriptors[0].kind, FieldKind::String);
    assert_eq!(descriptors[5].kind, FieldKind::Int);
    assert_eq!(descriptors[6].kind, FieldKind::Other);
    assert_eq!(descriptors[7].rules, "");
    assert_eq!(descriptors[6].value(&valid_user()), FieldValue::PRESENT);
}

// =============================================================================
// JSON bodies
// =============================================================================

#[test]
fn test_pipe_accepts_valid_body() {
    let body = serde_json::json!({
        "email": "jane@example.com",
        "password": "P@ssw0rdStrong",
        "username": "jane",
        "birthday": "",
        "gender": "",
        "age": 20,
        "referral": "friend",
        "note": ""
    });

    let user: CreateUser = ValidationPipe::parse(body.to_string().as_bytes()).unwrap();
    assert_eq!(user.username, "jane");
}

#[test]
fn test_pipe_rejects_invalid_body() {
    let body = serde_json::json!({
        "email": "jane@example.com",
        "password": "P@ssw0rdStrong",
        "username": "jane",
        "birthday": "",
        "gender": "",
        "age": 20,
        "referral": null,
        "note": ""
    });

    let err = ValidationPipe::parse::<CreateUser>(body.to_string().as_bytes()).unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(
        err.to_json()["errors"][0]["message"],
        "field [referral] is required, but is missing"
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_validation_shares_nothing() {
    let user = Arc::new({
        let mut user = valid_user();
        user.gender = "unknown".into();
        user
    });
    let expected = body_request(user.as_ref());

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let user = Arc::clone(&user);
            tokio::task::spawn_blocking(move || body_request(user.as_ref()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
