//! Driving port for credential checks.
//!
//! Inbound adapters call it to turn presented credentials into a user id
//! without importing the directory or its stores, so handler tests can
//! substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
