//! Password strength evaluator - scoring and detailed evaluation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::SECTIONS;
use crate::types::{PasswordEvaluation, StrengthIndicator, StrengthScore, StrengthTier};

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Something that can score a password and bucket the score.
pub trait Evaluator {
    fn evaluate(&self, password: &SecretString) -> StrengthScore;

    fn classify(&self, score: StrengthScore, is_empty: bool) -> StrengthTier {
        StrengthTier::classify(score, is_empty)
    }

    /// Score and classify in one step, for the strength indicator.
    fn indicator(&self, password: &SecretString) -> StrengthIndicator {
        let is_empty = password.expose_secret().is_empty();
        self.classify(self.evaluate(password), is_empty).into()
    }
}

/// The six-check scorer: two length thresholds and four character classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEvaluator;

impl Evaluator for RuleEvaluator {
    fn evaluate(&self, password: &SecretString) -> StrengthScore {
        evaluate(password)
    }
}

/// Scores a password from 0 to 6, one point per satisfied check.
pub fn evaluate(password: &SecretString) -> StrengthScore {
    let points = SECTIONS
        .iter()
        .filter(|(_, section)| section(password).is_none())
        .count();
    StrengthScore::new(points as u8)
}

/// Buckets a score; an empty password is always [`StrengthTier::Empty`].
pub fn classify(score: StrengthScore, is_empty: bool) -> StrengthTier {
    StrengthTier::classify(score, is_empty)
}

/// Evaluates a password and collects a hint for every unmet check.
///
/// The empty password gets no hints: the indicator is cleared instead.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let is_empty = password.expose_secret().is_empty();
    let mut reasons = Vec::new();
    let mut points: u8 = 0;

    for (_name, section) in SECTIONS {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
                #[cfg(feature = "tracing")]
                tracing::debug!("password evaluation cancelled before section {}", _name);
                reasons.push("Evaluation cancelled".to_string());
                return PasswordEvaluation {
                    score: None,
                    reasons,
                    is_empty,
                };
            }
        }

        match section(password) {
            None => points += 1,
            Some(hint) => {
                if !is_empty {
                    reasons.push(hint);
                }
            }
        }
    }

    PasswordEvaluation {
        score: Some(StrengthScore::new(points)),
        reasons,
        is_empty,
    }
}

/// Debounced evaluation that sends the result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluation scheduled in {:?}", DEBOUNCE);

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
