//! Pure field validators.
//!
//! Stateless helpers used by form code and by the store's accessor before
//! a mutation is dispatched. Optional fields treat empty input as valid;
//! only a present-but-malformed value fails.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s()+\-]+$").expect("phone pattern compiles"));

static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,10}$").expect("pincode pattern compiles"));

/// Whether `email` looks like a deliverable address (`local@domain.tld`).
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `phone` is a plausible phone number.
///
/// Optional field: empty input is valid. Otherwise the value may contain
/// digits, whitespace, parentheses, `+` and `-`, and must carry at least
/// ten digits.
pub fn validate_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_RE.is_match(phone) && digits >= 10
}

/// Whether `pincode` is a 5–10 digit postal code. Empty input is valid.
pub fn validate_pincode(pincode: &str) -> bool {
    if pincode.is_empty() {
        return true;
    }
    PINCODE_RE.is_match(pincode)
}

/// Whether `year` parses to a year between 1900 and the current year,
/// inclusive. Empty input is valid.
pub fn validate_birth_year(year: &str) -> bool {
    if year.is_empty() {
        return true;
    }
    match year.parse::<i32>() {
        Ok(y) => (1900..=Utc::now().year()).contains(&y),
        Err(_) => false,
    }
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        assert!(validate_email("ada@x.com"));
        assert!(validate_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("spaces in@x.com"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("@x.com"));
    }

    #[test]
    fn phone_is_optional() {
        assert!(validate_phone(""));
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert!(validate_phone("+91 98765 43210"));
        assert!(validate_phone("(022) 4567-8901"));
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("98765x43210"));
    }

    #[test]
    fn pincode_bounds() {
        assert!(validate_pincode(""));
        assert!(validate_pincode("40001"));
        assert!(validate_pincode("4000123456"));
        assert!(!validate_pincode("4000"));
        assert!(!validate_pincode("40001234567"));
        assert!(!validate_pincode("4000a"));
    }

    #[test]
    fn birth_year_bounds() {
        assert!(validate_birth_year(""));
        assert!(validate_birth_year("1900"));
        assert!(validate_birth_year("1985"));
        assert!(!validate_birth_year("1899"));
        assert!(!validate_birth_year("3000"));
        assert!(!validate_birth_year("not-a-year"));
    }
}
