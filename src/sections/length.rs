//! Length sections - one point at 8 characters, another at 12.

use super::SectionResult;
use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;
pub const LONG_LENGTH: usize = 12;

fn char_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Passes when the password has at least [`MIN_LENGTH`] characters.
pub fn min_length_section(password: &SecretString) -> SectionResult {
    if char_len(password) < MIN_LENGTH {
        return Some(format!("Use at least {} characters", MIN_LENGTH));
    }
    None
}

/// Passes when the password has at least [`LONG_LENGTH`] characters.
pub fn long_length_section(password: &SecretString) -> SectionResult {
    if char_len(password) < LONG_LENGTH {
        return Some(format!("Use {} or more characters", LONG_LENGTH));
    }
    None
}
