// Password strength policy

use crate::patterns;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest accepted password, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 20;

/// Composite strength policy applied by the `password` condition.
///
/// A password is strong when it has a special character, an ASCII digit, an
/// ASCII uppercase and an ASCII lowercase letter, no whitespace, and a
/// length inside the inclusive bounds.
///
/// ```
/// use fieldcheck_validation::PasswordPolicy;
///
/// let policy = PasswordPolicy::default();
/// assert!(policy.is_strong("P@ssw0rdStrong"));
/// assert!(!policy.is_strong("Password"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
        }
    }
}

/// Outcome of each individual policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordReport {
    pub special: bool,
    pub digit: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub correct_size: bool,
    pub whitespace: bool,
}

impl PasswordReport {
    pub fn is_strong(&self) -> bool {
        self.special
            && self.digit
            && self.uppercase
            && self.lowercase
            && self.correct_size
            && !self.whitespace
    }
}

impl PasswordPolicy {
    /// Run every check without short-circuiting.
    pub fn check(&self, password: &str) -> PasswordReport {
        let length = password.chars().count();
        PasswordReport {
            special: patterns::has_special_char(password),
            digit: patterns::has_digit(password),
            uppercase: patterns::has_uppercase(password),
            lowercase: patterns::has_lowercase(password),
            correct_size: (self.min_length..=self.max_length).contains(&length),
            whitespace: patterns::has_whitespace(password),
        }
    }

    pub fn is_strong(&self, password: &str) -> bool {
        self.check(password).is_strong()
    }
}

/// [`PasswordPolicy::is_strong`] with the default 8 to 20 character policy.
pub fn is_strong_password(password: &str) -> bool {
    PasswordPolicy::default().is_strong(password)
}
