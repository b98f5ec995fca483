//! Authentication primitives: login credentials, the acting caller, and the
//! policy deciding whether recipes are owned.

use std::fmt;

use zeroize::Zeroizing;

use super::UserId;

/// Error returned when login payload values are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Credentials presented by a caller.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use recipes_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" cook@example.com ", "password1")
///     .expect("credentials");
/// assert_eq!(creds.email(), "cook@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Caller on whose behalf a catalog operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    User(UserId),
}

impl Actor {
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(id),
        }
    }
}

impl From<UserId> for Actor {
    fn from(value: UserId) -> Self {
        Self::User(value)
    }
}

/// Whether recipes carry an author that gates mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Callers must be authenticated; only the author may mutate.
    #[default]
    Owned,
    /// Callers are not identified and recipes have no author.
    Open,
}

impl AccessPolicy {
    pub fn from_auth_enabled(enabled: bool) -> Self {
        if enabled { Self::Owned } else { Self::Open }
    }

    pub fn requires_authentication(self) -> bool {
        matches!(self, Self::Owned)
    }
}
