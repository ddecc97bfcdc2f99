//! Display helpers for the review form: star glyphs, the star-rating widget
//! state and the character counter.

use crate::config::FormLimits;
use crate::validation::{MAX_RATING, MIN_RATING};

pub const FULL_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// `rating` filled stars followed by empty ones, five in total.
pub fn star_glyphs(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let mut out = String::with_capacity(usize::from(MAX_RATING) * FULL_STAR.len_utf8());
    out.extend(std::iter::repeat_n(FULL_STAR, filled));
    out.extend(std::iter::repeat_n(EMPTY_STAR, usize::from(MAX_RATING) - filled));
    out
}

/// State of the clickable star-rating input.
///
/// Hovering previews a rating without changing the selection; leaving the
/// widget drops the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    selected: Option<u8>,
    preview: Option<u8>,
}

impl StarRating {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget pre-filled when editing an existing review.
    pub fn with_initial(rating: u8) -> Self {
        let mut widget = Self::new();
        widget.click(rating);
        widget
    }

    fn in_range(rating: u8) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    /// Selects a rating. Returns `false` and changes nothing when out of range.
    pub fn click(&mut self, rating: u8) -> bool {
        if !Self::in_range(rating) {
            return false;
        }
        self.selected = Some(rating);
        self.preview = None;
        true
    }

    pub fn hover(&mut self, rating: u8) {
        if Self::in_range(rating) {
            self.preview = Some(rating);
        }
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Value for the hidden rating input.
    pub fn value(&self) -> Option<u8> {
        self.selected
    }

    /// Number of stars carrying the `active` class.
    pub fn active(&self) -> u8 {
        self.selected.unwrap_or(0)
    }

    pub fn glyphs(&self) -> String {
        star_glyphs(self.preview.or(self.selected).unwrap_or(0))
    }
}

/// Colour band of the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn css_color(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "var(--text-light)",
            CounterLevel::Warning => "var(--warning-color)",
            CounterLevel::Danger => "var(--danger-color)",
        }
    }
}

/// Live character counter under the review textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    max: usize,
}

impl CharCounter {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn count(text: &str) -> usize {
        text.chars().count()
    }

    pub fn label(&self, len: usize) -> String {
        format!("{} / {} characters", len, self.max)
    }

    /// Danger above 90% of the maximum, warning above 75%.
    pub fn level(&self, len: usize) -> CounterLevel {
        // len > 0.9 * max  <=>  10 * len > 9 * max
        if len.saturating_mul(10) > self.max.saturating_mul(9) {
            CounterLevel::Danger
        } else if len.saturating_mul(4) > self.max.saturating_mul(3) {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }
}

impl From<&FormLimits> for CharCounter {
    fn from(limits: &FormLimits) -> Self {
        Self::new(limits.review_text_max)
    }
}
