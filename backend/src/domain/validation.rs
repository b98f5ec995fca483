//! Field validation for recipes and account registrations.
//!
//! A single [`Validator`] is built at startup from [`ValidationRules`] and
//! shared by both services.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Value, json};

use super::{Email, RecipeContent, RecipeDraft, UserValidationError};

/// Default minimum password length.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    // ASCII word characters only.
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"(?-u)^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Recipe field constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeValidationError {
    BlankName,
    BlankDescription,
    NoIngredients,
    BlankIngredient { index: usize },
    NoDirections,
    BlankDirection { index: usize },
    BlankCategory,
}

impl RecipeValidationError {
    /// Name of the payload field the violation belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankName => "name",
            Self::BlankDescription => "description",
            Self::NoIngredients | Self::BlankIngredient { .. } => "ingredients",
            Self::NoDirections | Self::BlankDirection { .. } => "directions",
            Self::BlankCategory => "category",
        }
    }

    /// Stable machine-readable code for the violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankName | Self::BlankDescription | Self::BlankCategory => "blank",
            Self::NoIngredients | Self::NoDirections => "empty",
            Self::BlankIngredient { .. } | Self::BlankDirection { .. } => "blank_entry",
        }
    }

    /// Structured details attached to the domain error.
    pub fn details(&self) -> Value {
        match self {
            Self::BlankIngredient { index } | Self::BlankDirection { index } => json!({
                "field": self.field(),
                "code": self.code(),
                "index": index,
            }),
            _ => json!({ "field": self.field(), "code": self.code() }),
        }
    }
}

impl fmt::Display for RecipeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::BlankDescription => write!(f, "description must not be blank"),
            Self::NoIngredients => write!(f, "ingredients must contain at least one entry"),
            Self::BlankIngredient { index } => write!(f, "ingredient {index} must not be blank"),
            Self::NoDirections => write!(f, "directions must contain at least one entry"),
            Self::BlankDirection { index } => write!(f, "direction {index} must not be blank"),
            Self::BlankCategory => write!(f, "category must not be blank"),
        }
    }
}

impl std::error::Error for RecipeValidationError {}

/// Tunable validation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub password_min_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

/// Stateless validator shared by the domain services.
///
/// # Examples
/// ```
/// use recipes_backend::domain::{RecipeDraft, ValidationRules, Validator};
///
/// let validator = Validator::new(ValidationRules::default());
/// let draft = RecipeDraft {
///     name: "Tea".into(),
///     description: "Hot".into(),
///     ingredients: vec!["water".into()],
///     directions: vec!["boil".into()],
///     category: "beverage".into(),
/// };
/// assert!(validator.validate_recipe(draft).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Check every recipe field constraint, reporting the first violation.
    pub fn validate_recipe(&self, draft: RecipeDraft) -> Result<RecipeContent, RecipeValidationError> {
        if is_blank(&draft.name) {
            return Err(RecipeValidationError::BlankName);
        }
        if is_blank(&draft.description) {
            return Err(RecipeValidationError::BlankDescription);
        }
        if draft.ingredients.is_empty() {
            return Err(RecipeValidationError::NoIngredients);
        }
        if let Some(index) = draft.ingredients.iter().position(|entry| is_blank(entry)) {
            return Err(RecipeValidationError::BlankIngredient { index });
        }
        if draft.directions.is_empty() {
            return Err(RecipeValidationError::NoDirections);
        }
        if let Some(index) = draft.directions.iter().position(|entry| is_blank(entry)) {
            return Err(RecipeValidationError::BlankDirection { index });
        }
        if is_blank(&draft.category) {
            return Err(RecipeValidationError::BlankCategory);
        }
        Ok(RecipeContent::from_stored(draft))
    }

    /// Check the email address format.
    pub fn validate_email(&self, raw: &str) -> Result<Email, UserValidationError> {
        if email_regex().is_match(raw) {
            Ok(Email::from_trusted(raw))
        } else {
            Err(UserValidationError::InvalidEmail)
        }
    }

    /// Check the password is present and long enough.
    pub fn validate_password(&self, raw: &str) -> Result<(), UserValidationError> {
        if is_blank(raw) {
            return Err(UserValidationError::BlankPassword);
        }
        let min = self.rules.password_min_length;
        if raw.chars().count() < min {
            return Err(UserValidationError::PasswordTooShort { min });
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
