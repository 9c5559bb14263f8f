// Rule matchers

use once_cell::sync::Lazy;
use regex::Regex;

// Local part is either dot-separated atoms or a quoted string; the domain
// needs at least one dot and a final label of two or more characters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\.,;:\s@"]+\.)+[^<>()\[\]\.,;:\s@"]{2,})$"#,
    )
    .expect("email pattern is valid")
});

// dd.mm.yyyy, syntactic only
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[012])\.(19|20)[0-9]{2}$")
        .expect("date pattern is valid")
});

static SPECIAL_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("special char pattern is valid"));

static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern is valid"));

static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern is valid"));

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s").expect("whitespace pattern is valid"));

/// Email syntax check.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// `dd.mm.yyyy` with a 19xx or 20xx year. Calendar validity is not checked.
pub fn is_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

/// `M` or `F`, either case.
pub fn is_gender(value: &str) -> bool {
    value.eq_ignore_ascii_case("M") || value.eq_ignore_ascii_case("F")
}

pub(crate) fn has_special_char(value: &str) -> bool {
    SPECIAL_CHAR_REGEX.is_match(value)
}

pub(crate) fn has_digit(value: &str) -> bool {
    DIGIT_REGEX.is_match(value)
}

pub(crate) fn has_uppercase(value: &str) -> bool {
    UPPERCASE_REGEX.is_match(value)
}

pub(crate) fn has_lowercase(value: &str) -> bool {
    LOWERCASE_REGEX.is_match(value)
}

pub(crate) fn has_whitespace(value: &str) -> bool {
    WHITESPACE_REGEX.is_match(value)
}
