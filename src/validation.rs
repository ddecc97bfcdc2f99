//! Form field rules
//!
//! Validators for the registration, login and review forms. Each returns the
//! first rule a value breaks as a [`FieldError`] whose `Display` is the
//! message shown to the user.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::FormLimits;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),
    #[error("Username must be at most {0} characters")]
    UsernameTooLong(usize),
    #[error("Username can only contain letters, numbers, and underscores")]
    UsernameCharacters,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Email is too long")]
    EmailTooLong,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Password is too long")]
    PasswordTooLong,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please provide both username and password.")]
    CredentialsRequired,
    #[error("Rating must be a number")]
    RatingNotNumber,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("Review text is required")]
    ReviewTextRequired,
    #[error("Review must be at least {0} characters")]
    ReviewTextTooShort(usize),
    #[error("Review must be at most {0} characters")]
    ReviewTextTooLong(usize),
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at most {0} characters")]
    TitleTooLong(usize),
    #[error("Category is required")]
    CategoryRequired,
    #[error("Category must be 'movie' or 'game'")]
    CategoryInvalid,
}

/// What a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Movie,
    Game,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Game => "game",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(FieldError::CategoryRequired),
            "movie" => Ok(Category::Movie),
            "game" => Ok(Category::Game),
            _ => Err(FieldError::CategoryInvalid),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn validate_username(username: &str, limits: &FormLimits) -> Result<(), FieldError> {
    if username.is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    let len = char_len(username);
    if len < limits.username_min {
        return Err(FieldError::UsernameTooShort(limits.username_min));
    }
    if len > limits.username_max {
        return Err(FieldError::UsernameTooLong(limits.username_max));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(FieldError::UsernameCharacters);
    }
    Ok(())
}

pub fn validate_email(email: &str, limits: &FormLimits) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    if char_len(email) > limits.email_max {
        return Err(FieldError::EmailTooLong);
    }
    Ok(())
}

pub fn validate_password(password: &SecretString, limits: &FormLimits) -> Result<(), FieldError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    let len = char_len(pwd);
    if len < limits.password_min {
        return Err(FieldError::PasswordTooShort(limits.password_min));
    }
    if len > limits.password_max {
        return Err(FieldError::PasswordTooLong);
    }
    Ok(())
}

/// Parses a submitted rating; surrounding whitespace is ignored.
pub fn validate_rating(rating: &str) -> Result<u8, FieldError> {
    let value: i64 = rating
        .trim()
        .parse()
        .map_err(|_| FieldError::RatingNotNumber)?;
    u8::try_from(value)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or(FieldError::RatingOutOfRange)
}

/// Returns the trimmed review text.
pub fn validate_review_text<'a>(text: &'a str, limits: &FormLimits) -> Result<&'a str, FieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FieldError::ReviewTextRequired);
    }
    let len = char_len(text);
    if len < limits.review_text_min {
        return Err(FieldError::ReviewTextTooShort(limits.review_text_min));
    }
    if len > limits.review_text_max {
        return Err(FieldError::ReviewTextTooLong(limits.review_text_max));
    }
    Ok(text)
}

/// Returns the trimmed title.
pub fn validate_title<'a>(title: &'a str, limits: &FormLimits) -> Result<&'a str, FieldError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FieldError::TitleRequired);
    }
    if char_len(title) > limits.title_max {
        return Err(FieldError::TitleTooLong(limits.title_max));
    }
    Ok(title)
}

pub fn validate_category(category: &str) -> Result<Category, FieldError> {
    category.parse()
}

/// HTML-escapes user text for display, drops NUL characters and trims.
pub fn sanitize_input(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\0' => {}
            c => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Submitted registration form.
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Registration that passed every rule, with sanitized identity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub username: String,
    pub email: String,
}

impl RegistrationForm {
    pub fn validate(&self, limits: &FormLimits) -> Result<ValidRegistration, FieldError> {
        let username = self.username.trim();
        let email = self.email.trim();

        validate_username(username, limits)?;
        validate_email(email, limits)?;
        validate_password(&self.password, limits)?;
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(FieldError::PasswordMismatch);
        }

        Ok(ValidRegistration {
            username: sanitize_input(username),
            email: sanitize_input(email),
        })
    }
}

/// Submitted login form.
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    /// Only checks presence; credentials are verified elsewhere.
    pub fn validate(&self) -> Result<&str, FieldError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.expose_secret().is_empty() {
            return Err(FieldError::CredentialsRequired);
        }
        Ok(username)
    }
}

/// Submitted create/edit review form, all fields as raw strings.
#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
    pub title: String,
    pub category: String,
    pub rating: String,
    pub review_text: String,
}

/// Review that passed every rule, with sanitized text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReview {
    pub title: String,
    pub category: Category,
    pub rating: u8,
    pub review_text: String,
}

impl ReviewForm {
    pub fn validate(&self, limits: &FormLimits) -> Result<ValidReview, FieldError> {
        let title = validate_title(&self.title, limits)?;
        let category = validate_category(&self.category)?;
        let rating = validate_rating(&self.rating)?;
        let review_text = validate_review_text(&self.review_text, limits)?;

        Ok(ValidReview {
            title: sanitize_input(title),
            category,
            rating,
            review_text: sanitize_input(review_text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn limits() -> FormLimits {
        FormLimits::default()
    }

    #[test]
    fn test_username_rules() {
        let l = limits();
        assert_eq!(validate_username("", &l), Err(FieldError::UsernameRequired));
        assert_eq!(validate_username("ab", &l), Err(FieldError::UsernameTooShort(3)));
        assert_eq!(
            validate_username(&"a".repeat(51), &l),
            Err(FieldError::UsernameTooLong(50))
        );
        assert_eq!(
            validate_username("bad name", &l),
            Err(FieldError::UsernameCharacters)
        );
        assert_eq!(validate_username("good_name_42", &l), Ok(()));
    }

    #[test]
    fn test_username_error_message() {
        assert_eq!(
            FieldError::UsernameTooShort(3).to_string(),
            "Username must be at least 3 characters"
        );
    }

    #[test]
    fn test_email_rules() {
        let l = limits();
        assert_eq!(validate_email("", &l), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("not-an-email", &l), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b.c", &l), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("reviewer@example.com", &l), Ok(()));

        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(validate_email(&long, &l), Err(FieldError::EmailTooLong));
    }

    #[test]
    fn test_password_rules() {
        let l = limits();
        assert_eq!(validate_password(&secret(""), &l), Err(FieldError::PasswordRequired));
        assert_eq!(
            validate_password(&secret("short"), &l),
            Err(FieldError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_password(&secret(&"x".repeat(129)), &l),
            Err(FieldError::PasswordTooLong)
        );
        assert_eq!(validate_password(&secret("longenough"), &l), Ok(()));
    }

    #[test]
    fn test_rating_rules() {
        assert_eq!(validate_rating("4"), Ok(4));
        assert_eq!(validate_rating(" 5 "), Ok(5));
        assert_eq!(validate_rating("0"), Err(FieldError::RatingOutOfRange));
        assert_eq!(validate_rating("6"), Err(FieldError::RatingOutOfRange));
        assert_eq!(validate_rating("-1"), Err(FieldError::RatingOutOfRange));
        assert_eq!(validate_rating("4.5"), Err(FieldError::RatingNotNumber));
        assert_eq!(validate_rating(""), Err(FieldError::RatingNotNumber));
        assert_eq!(
            FieldError::RatingOutOfRange.to_string(),
            "Rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_review_text_rules() {
        let l = limits();
        assert_eq!(validate_review_text("   ", &l), Err(FieldError::ReviewTextRequired));
        assert_eq!(
            validate_review_text("  too short ", &l),
            Err(FieldError::ReviewTextTooShort(10))
        );
        assert_eq!(
            validate_review_text(&"x".repeat(5001), &l),
            Err(FieldError::ReviewTextTooLong(5000))
        );
        assert_eq!(
            validate_review_text("  A fine film overall.  ", &l),
            Ok("A fine film overall.")
        );
    }

    #[test]
    fn test_title_rules() {
        let l = limits();
        assert_eq!(validate_title(" ", &l), Err(FieldError::TitleRequired));
        assert_eq!(
            validate_title(&"t".repeat(201), &l),
            Err(FieldError::TitleTooLong(200))
        );
        assert_eq!(validate_title(" Dune ", &l), Ok("Dune"));
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(validate_category("movie"), Ok(Category::Movie));
        assert_eq!(validate_category("game"), Ok(Category::Game));
        assert_eq!(validate_category(""), Err(FieldError::CategoryRequired));
        assert_eq!(validate_category("Movie"), Err(FieldError::CategoryInvalid));
        assert_eq!(Category::Game.to_string(), "game");
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(
            sanitize_input("  <script>alert('x')</script> & \"q\"\0 "),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt; &amp; &quot;q&quot;"
        );
        assert_eq!(sanitize_input("plain"), "plain");
    }

    #[test]
    fn test_registration_form() {
        let form = RegistrationForm {
            username: "  reviewer_1 ".to_string(),
            email: "reviewer@example.com".to_string(),
            password: secret("Abcdefgh1"),
            confirm_password: secret("Abcdefgh1"),
        };
        let valid = form.validate(&limits()).expect("form is valid");
        assert_eq!(valid.username, "reviewer_1");
        assert_eq!(valid.email, "reviewer@example.com");
    }

    #[test]
    fn test_registration_form_mismatch() {
        let form = RegistrationForm {
            username: "reviewer".to_string(),
            email: "reviewer@example.com".to_string(),
            password: secret("Abcdefgh1"),
            confirm_password: secret("Abcdefgh2"),
        };
        assert_eq!(form.validate(&limits()), Err(FieldError::PasswordMismatch));
    }

    #[test]
    fn test_registration_form_first_error_wins() {
        let form = RegistrationForm {
            username: "x".to_string(),
            email: "".to_string(),
            password: secret(""),
            confirm_password: secret("other"),
        };
        assert_eq!(form.validate(&limits()), Err(FieldError::UsernameTooShort(3)));
    }

    #[test]
    fn test_login_form() {
        let form = LoginForm {
            username: " reviewer ".to_string(),
            password: secret("pw"),
        };
        assert_eq!(form.validate(), Ok("reviewer"));

        let blank = LoginForm {
            username: "   ".to_string(),
            password: secret("pw"),
        };
        assert_eq!(blank.validate(), Err(FieldError::CredentialsRequired));
    }

    #[test]
    fn test_review_form() {
        let form = ReviewForm {
            title: " Portal 2 ".to_string(),
            category: "game".to_string(),
            rating: "5".to_string(),
            review_text: "Clever <puzzles> and great writing.".to_string(),
        };
        let review = form.validate(&limits()).expect("form is valid");
        assert_eq!(review.title, "Portal 2");
        assert_eq!(review.category, Category::Game);
        assert_eq!(review.rating, 5);
        assert_eq!(review.review_text, "Clever &lt;puzzles&gt; and great writing.");
    }

    #[test]
    fn test_review_form_field_order() {
        let form = ReviewForm {
            title: "Heat".to_string(),
            category: "book".to_string(),
            rating: "9".to_string(),
            review_text: String::new(),
        };
        assert_eq!(form.validate(&limits()), Err(FieldError::CategoryInvalid));
    }
}
