//! Password strength feedback and form rules for a review-submission app
//!
//! This library provides the logic behind the registration and review forms:
//! a six-point password strength score with its display tier, field
//! validators, and the star-rating and character-counter helpers.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `REVIEW_FORM_<FIELD>`: Overrides a bound in [`FormLimits`]
//!   (e.g. `REVIEW_FORM_REVIEW_TEXT_MAX=2000`)
//!
//! # Example
//!
//! ```rust
//! use review_form::{classify, evaluate, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefgh1".to_string().into());
//!
//! let score = evaluate(&password);
//! assert_eq!(score.value(), 4);
//! assert_eq!(classify(score, false), StrengthTier::Medium);
//! ```

mod config;
mod controller;
mod display;
mod evaluator;
mod sections;
mod types;
mod validation;

// Public API
pub use config::{ConfigError, FormLimits};
pub use controller::{FormController, SubmitVerdict};
pub use display::{star_glyphs, CharCounter, CounterLevel, StarRating, EMPTY_STAR, FULL_STAR};
pub use evaluator::{classify, evaluate, evaluate_password_strength, Evaluator, RuleEvaluator};
pub use types::{PasswordEvaluation, StrengthIndicator, StrengthScore, StrengthTier};
pub use validation::{
    sanitize_input, validate_category, validate_email, validate_password, validate_rating,
    validate_review_text, validate_title, validate_username, Category, FieldError, LoginForm,
    RegistrationForm, ReviewForm, ValidRegistration, ValidReview, MAX_RATING, MIN_RATING,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
