//! Driving port for account registration and lookup.

use async_trait::async_trait;

use crate::domain::{Error, UserAccount, UserRegistration};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Register a new standard account.
    async fn register(&self, registration: UserRegistration) -> Result<UserAccount, Error>;

    /// Look an account up by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> Result<UserAccount, Error>;
}
