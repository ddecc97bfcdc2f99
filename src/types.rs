//! Score, tier and evaluation types shared by the evaluator and the UI layer.

use std::fmt;

/// Password strength score in `0..=6`, one point per satisfied check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MIN: StrengthScore = StrengthScore(0);
    pub const MAX: StrengthScore = StrengthScore(6);

    /// Builds a score, saturating at [`StrengthScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

/// Display bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// `Empty` wins over any score; otherwise cut at 3 and 5.
    pub fn classify(score: StrengthScore, is_empty: bool) -> Self {
        if is_empty {
            return StrengthTier::Empty;
        }
        match score.value() {
            0..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    /// CSS modifier class added next to `password-strength`.
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthTier::Empty => "",
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }

    /// Tooltip text for the indicator.
    pub fn title(&self) -> &'static str {
        match self {
            StrengthTier::Empty => "",
            StrengthTier::Weak => "Weak password",
            StrengthTier::Medium => "Medium strength password",
            StrengthTier::Strong => "Strong password",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthTier::Empty => "empty",
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// What the strength indicator should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthIndicator {
    pub tier: StrengthTier,
    pub class_name: &'static str,
    pub title: &'static str,
}

impl From<StrengthTier> for StrengthIndicator {
    fn from(tier: StrengthTier) -> Self {
        Self {
            tier,
            class_name: tier.css_class(),
            title: tier.title(),
        }
    }
}

/// Result of a detailed evaluation.
///
/// `score` is `None` when the evaluation was cancelled before completing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: Option<StrengthScore>,
    pub reasons: Vec<String>,
    pub is_empty: bool,
}

impl PasswordEvaluation {
    pub fn tier(&self) -> Option<StrengthTier> {
        self.score
            .map(|score| StrengthTier::classify(score, self.is_empty))
    }

    pub fn indicator(&self) -> Option<StrengthIndicator> {
        self.tier().map(StrengthIndicator::from)
    }
}
