//! Character variety sections - lowercase, uppercase, digits, symbols.
//!
//! Classes are ASCII: `a-z`, `A-Z`, `0-9`, and anything else counts as a
//! symbol (including accented letters and whitespace).

use super::SectionResult;
use secrecy::{ExposeSecret, SecretString};

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !any_char(password, |c| c.is_ascii_lowercase()) {
        return Some("Add a lowercase letter".to_string());
    }
    None
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !any_char(password, |c| c.is_ascii_uppercase()) {
        return Some("Add an uppercase letter".to_string());
    }
    None
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    if !any_char(password, |c| c.is_ascii_digit()) {
        return Some("Add a number".to_string());
    }
    None
}

/// Passes on any character outside `[a-zA-Z0-9]`.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !any_char(password, |c| !c.is_ascii_alphanumeric()) {
        return Some("Add a special character".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let hint = uppercase_section(&secret("lowercase123!"));
        assert!(hint.is_some_and(|h| h.contains("uppercase")));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let hint = lowercase_section(&secret("UPPERCASE123!"));
        assert!(hint.is_some_and(|h| h.contains("lowercase")));
    }

    #[test]
    fn test_variety_missing_numbers() {
        let hint = digit_section(&secret("NoNumbers!"));
        assert!(hint.is_some_and(|h| h.contains("number")));
    }

    #[test]
    fn test_variety_missing_special() {
        let hint = special_section(&secret("NoSpecial123"));
        assert!(hint.is_some_and(|h| h.contains("special")));
    }

    #[test]
    fn test_variety_all_categories() {
        let pwd = secret("HasAll123!@#");
        assert_eq!(lowercase_section(&pwd), None);
        assert_eq!(uppercase_section(&pwd), None);
        assert_eq!(digit_section(&pwd), None);
        assert_eq!(special_section(&pwd), None);
    }

    #[test]
    fn test_non_ascii_letters_count_as_special() {
        let pwd = secret("ÄÖÜ");
        assert_eq!(special_section(&pwd), None);
        assert!(uppercase_section(&pwd).is_some());
    }

    #[test]
    fn test_space_counts_as_special() {
        assert_eq!(special_section(&secret("a b")), None);
    }
}
