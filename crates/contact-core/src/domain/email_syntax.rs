//! Email address syntax check used by the contact form rules.
//!
//! The rule mirrors the check most web form libraries apply to an
//! `email` field:
//!
//! ```text
//! local-part @ label . label . tld
//! ```
//!
//! - The local part uses letters, digits, and `_ ' + - .`, must not start
//!   with a dot, and must end in a non-dot character.
//! - The domain is one or more labels (`[A-Za-z0-9][A-Za-z0-9-]*`) followed
//!   by a top-level domain of at least two letters.
//! - Two consecutive dots are never allowed anywhere in the address.
//!
//! The `regex` crate has no look-around, so the "no leading dot" and
//! "no `..`" parts are checked in plain code next to the pattern.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled once on first use; the pattern is a compile-time constant.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Returns `true` when `candidate` is a syntactically valid email address.
///
/// No DNS lookup is performed; this only checks shape.
///
/// # Example
///
/// ```rust
/// use contact_core::is_valid_email;
///
/// assert!(is_valid_email("awa@example.com"));
/// assert!(!is_valid_email("awa@example"));
/// ```
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.starts_with('.') || candidate.contains("..") {
        return false;
    }
    EMAIL_PATTERN.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("awa@example.com"));
    }

    #[test]
    fn test_accepts_plus_tag_and_subdomain() {
        assert!(is_valid_email("awa+site@mail.example.org"));
    }

    #[test]
    fn test_accepts_dotted_local_part() {
        assert!(is_valid_email("first.last@example.fr"));
    }

    #[test]
    fn test_accepts_hyphenated_domain_label() {
        assert!(is_valid_email("contact@gd-consulting.com"));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!is_valid_email("awa@example"));
    }

    #[test]
    fn test_rejects_single_letter_tld() {
        assert!(!is_valid_email("awa@example.c"));
    }

    #[test]
    fn test_rejects_leading_dot() {
        assert!(!is_valid_email(".awa@example.com"));
    }

    #[test]
    fn test_rejects_trailing_dot_in_local_part() {
        assert!(!is_valid_email("awa.@example.com"));
    }

    #[test]
    fn test_rejects_consecutive_dots() {
        assert!(!is_valid_email("a..wa@example.com"));
        assert!(!is_valid_email("awa@example..com"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("a wa@example.com"));
        assert!(!is_valid_email(" awa@example.com"));
    }

    #[test]
    fn test_rejects_domain_label_starting_with_hyphen() {
        assert!(!is_valid_email("awa@-example.com"));
    }

    #[test]
    fn test_rejects_two_at_signs() {
        assert!(!is_valid_email("awa@home@example.com"));
    }
}
