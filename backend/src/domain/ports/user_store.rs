//! Driven port for user account persistence.

use async_trait::async_trait;

use crate::domain::{Email, NewUserAccount, UserAccount};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// The store's uniqueness guard rejected the email.
        DuplicateEmail { email: String } => "an account already exists for {email}",
    }
}

/// User account persistence. Email comparisons ignore case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account and assign its identity.
    async fn insert(&self, account: &NewUserAccount) -> Result<UserAccount, UserStoreError>;

    /// Whether any account uses `email`, ignoring case.
    async fn exists_with_email(&self, email: &Email) -> Result<bool, UserStoreError>;

    /// Fetch the account registered under `email`, ignoring case.
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, UserStoreError>;
}
