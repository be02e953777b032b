// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// Constant pattern, checked by the tests.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Characters that count as "special" for password strength.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Loose format check: something, `@`, something, `.`, something, no spaces.
pub fn is_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Whether `url` parses as an absolute URL.
///
/// ```
/// use handy_core::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("example.com"));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Which password rules a candidate satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordStrength {
    /// All rules hold.
    pub const fn is_strong(&self) -> bool {
        self.long_enough
            && self.has_uppercase
            && self.has_lowercase
            && self.has_digit
            && self.has_special
    }
}

/// Check `password` against every rule.
pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength {
        long_enough: password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
    }
}

/// At least [`MIN_PASSWORD_LENGTH`] characters with an ASCII uppercase letter,
/// a lowercase letter, a digit and one of [`SPECIAL_CHARACTERS`].
pub fn is_password_strong(password: &str) -> bool {
    password_strength(password).is_strong()
}
