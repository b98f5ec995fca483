//! User account data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::PasswordDigest;

/// Validation errors raised for user identifiers and registration payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    InvalidEmail,
    BlankPassword,
    PasswordTooShort { min: usize },
}

impl UserValidationError {
    /// Name of the payload field the violation belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::InvalidId => "id",
            Self::InvalidEmail => "email",
            Self::BlankPassword | Self::PasswordTooShort { .. } => "password",
        }
    }

    /// Stable machine-readable code for the violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyId => "empty_id",
            Self::InvalidId => "invalid_id",
            Self::InvalidEmail => "invalid_email",
            Self::BlankPassword => "blank_password",
            Self::PasswordTooShort { .. } => "password_too_short",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::InvalidEmail => write!(f, "email is not valid"),
            Self::BlankPassword => write!(f, "password must not be blank"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an identifier loaded from a store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address that passed format validation.
///
/// The original casing is preserved for display; comparisons for
/// uniqueness and lookup go through [`Email::normalized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Construct from a value already checked by the validator or a store.
    pub(crate) fn from_trusted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Lower-cased form used for case-insensitive comparison.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authorisation role. Registration only ever grants the standard role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    StandardUser,
}

impl Role {
    /// Stored representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StandardUser => "ROLE_USER",
        }
    }

    /// Parse the stored representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ROLE_USER" => Some(Self::StandardUser),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StandardUser => f.write_str("standard user"),
        }
    }
}

/// Untrusted registration payload.
///
/// `active` and `role` are accepted so callers can send them, but
/// registration always overrides both.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub email: String,
    pub password: Zeroizing<String>,
    pub active: Option<bool>,
    pub role: Option<String>,
}

impl UserRegistration {
    /// Build a registration payload from email and password only.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            active: None,
            role: None,
        }
    }
}

/// Validated account handed to a store for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserAccount {
    pub email: Email,
    pub password: PasswordDigest,
    pub active: bool,
    pub role: Role,
}

/// Persisted user account.
///
/// ## Invariants
/// - `email` passed format validation before insertion.
/// - At most one account exists per lower-cased email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    id: UserId,
    email: Email,
    password: PasswordDigest,
    active: bool,
    role: Role,
}

impl UserAccount {
    /// Assemble an account from its stored parts.
    pub fn new(id: UserId, account: NewUserAccount) -> Self {
        let NewUserAccount {
            email,
            password,
            active,
            role,
        } = account;
        Self {
            id,
            email,
            password,
            active,
            role,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
