//! Password strength sections
//!
//! Each section is one of the six scoring checks. A section that passes earns
//! one point; a section that fails returns a hint for the user.

mod length;
mod variety;

pub use length::{long_length_section, min_length_section};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use secrecy::SecretString;

/// Result type for section functions.
/// - `None` - Check satisfied, worth one point
/// - `Some(hint)` - Check unmet, with a hint on how to satisfy it
pub type SectionResult = Option<String>;

pub type Section = fn(&SecretString) -> SectionResult;

/// All scoring sections, in evaluation order.
pub const SECTIONS: [(&str, Section); 6] = [
    ("min_length", min_length_section),
    ("long_length", long_length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("special", special_section),
];
