//! Form limits configuration
//!
//! Every numeric bound used by the form rules lives in [`FormLimits`].
//! Defaults match the review app; each one can be overridden through an
//! environment variable named `REVIEW_FORM_<FIELD>`.

use std::ops::RangeInclusive;
use thiserror::Error;

pub const ENV_PREFIX: &str = "REVIEW_FORM_";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
    #[error("Invalid range for {field}: minimum {min} exceeds maximum {max}")]
    InvalidRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Length bounds for every form field, in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLimits {
    pub username_min: usize,
    pub username_max: usize,
    pub email_max: usize,
    pub password_min: usize,
    pub password_max: usize,
    pub title_max: usize,
    pub review_text_min: usize,
    pub review_text_max: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            username_min: 3,
            username_max: 50,
            email_max: 255,
            password_min: 8,
            password_max: 128,
            title_max: 200,
            review_text_min: 10,
            review_text_max: 5000,
        }
    }
}

/// Reads `REVIEW_FORM_<NAME>` as a `usize`, falling back to `default`.
fn env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    let var = format!("{ENV_PREFIX}{name}");
    match std::env::var(&var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(default),
    }
}

impl FormLimits {
    /// Builds limits from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `REVIEW_FORM_<FIELD>` (e.g. `REVIEW_FORM_REVIEW_TEXT_MAX`)
    /// 2. The default from [`FormLimits::default`]
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A variable is set but is not a non-negative integer
    /// - A minimum ends up greater than its maximum
    pub fn from_env() -> Result<Self, ConfigError> {
        let d = Self::default();
        let limits = Self {
            username_min: env_usize("USERNAME_MIN", d.username_min)?,
            username_max: env_usize("USERNAME_MAX", d.username_max)?,
            email_max: env_usize("EMAIL_MAX", d.email_max)?,
            password_min: env_usize("PASSWORD_MIN", d.password_min)?,
            password_max: env_usize("PASSWORD_MAX", d.password_max)?,
            title_max: env_usize("TITLE_MAX", d.title_max)?,
            review_text_min: env_usize("REVIEW_TEXT_MIN", d.review_text_min)?,
            review_text_max: env_usize("REVIEW_TEXT_MAX", d.review_text_max)?,
        };
        limits.check()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Form limits loaded: {:?}", limits);

        Ok(limits)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let pairs = [
            ("username", self.username_min, self.username_max),
            ("password", self.password_min, self.password_max),
            ("review_text", self.review_text_min, self.review_text_max),
        ];
        for (field, min, max) in pairs {
            if min > max {
                #[cfg(feature = "tracing")]
                tracing::error!("Form limits rejected: {} min {} > max {}", field, min, max);
                return Err(ConfigError::InvalidRange { field, min, max });
            }
        }
        Ok(())
    }

    pub fn username(&self) -> RangeInclusive<usize> {
        self.username_min..=self.username_max
    }

    pub fn password(&self) -> RangeInclusive<usize> {
        self.password_min..=self.password_max
    }

    pub fn review_text(&self) -> RangeInclusive<usize> {
        self.review_text_min..=self.review_text_max
    }
}
