//! Form controller - the adapter between form events and the evaluator.
//!
//! Mirrors what the browser does before a form leaves the page: live strength
//! feedback while typing and quick guards on submit. Full server-side rules
//! live in [`crate::validation`].

use secrecy::{ExposeSecret, SecretString};

use crate::config::FormLimits;
use crate::evaluator::{Evaluator, RuleEvaluator};
use crate::types::StrengthIndicator;
use crate::validation::validate_rating;

/// Whether a submit may go ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitVerdict {
    Proceed,
    /// Submission is prevented and the message is shown to the user.
    Block(String),
}

impl SubmitVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitVerdict::Block(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormController<E: Evaluator = RuleEvaluator> {
    evaluator: E,
    limits: FormLimits,
}

impl<E: Evaluator> FormController<E> {
    pub fn new(evaluator: E, limits: FormLimits) -> Self {
        Self { evaluator, limits }
    }

    pub fn limits(&self) -> &FormLimits {
        &self.limits
    }

    /// Called on every change of the password field.
    pub fn on_password_input(&self, password: &SecretString) -> StrengthIndicator {
        let indicator = self.evaluator.indicator(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("password strength indicator: {}", indicator.tier);

        indicator
    }

    pub fn on_register_submit(
        &self,
        password: &SecretString,
        confirm_password: &SecretString,
    ) -> SubmitVerdict {
        if password.expose_secret() != confirm_password.expose_secret() {
            return SubmitVerdict::Block("Passwords do not match!".to_string());
        }
        SubmitVerdict::Proceed
    }

    /// `rating` is the hidden input's value, `None` when nothing was picked.
    pub fn on_review_submit(&self, rating: Option<&str>, review_text: &str) -> SubmitVerdict {
        if rating.is_none_or(|r| validate_rating(r).is_err()) {
            return SubmitVerdict::Block("Please select a rating (1-5 stars)".to_string());
        }
        let min = self.limits.review_text_min;
        if review_text.trim().chars().count() < min {
            return SubmitVerdict::Block(format!(
                "Review must be at least {} characters long",
                min
            ));
        }
        SubmitVerdict::Proceed
    }
}
