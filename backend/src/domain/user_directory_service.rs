//! User directory service.
//!
//! Registers standard accounts, resolves accounts by email, and checks
//! presented credentials for the HTTP Basic extractor.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{LoginService, UserDirectory, UserStore, UserStoreError};
use crate::domain::{
    Email, Error, LoginCredentials, NewUserAccount, PasswordDigest, Role, UserAccount, UserId,
    UserRegistration, UserValidationError, Validator,
};

const INVALID_CREDENTIALS: &str = "invalid credentials";

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => Error::internal(format!("user store error: {message}")),
        UserStoreError::DuplicateEmail { email } => duplicate_account(&email),
    }
}

fn duplicate_account(email: &str) -> Error {
    Error::duplicate_account(format!("an account already exists for {email}"))
}

fn invalid_account(err: &UserValidationError) -> Error {
    Error::invalid_account(format!("invalid account: {err}"))
        .with_details(json!({ "field": err.field(), "code": err.code() }))
}

/// Directory of user accounts backed by a user store.
#[derive(Clone)]
pub struct UserDirectoryService<U> {
    store: Arc<U>,
    validator: Arc<Validator>,
}

impl<U> UserDirectoryService<U> {
    pub fn new(store: Arc<U>, validator: Arc<Validator>) -> Self {
        Self { store, validator }
    }
}

impl<U> UserDirectoryService<U>
where
    U: UserStore,
{
    async fn lookup(&self, email: &Email) -> Result<Option<UserAccount>, Error> {
        self.store
            .find_by_email(email)
            .await
            .map_err(map_store_error)
    }
}

#[async_trait]
impl<U> UserDirectory for UserDirectoryService<U>
where
    U: UserStore,
{
    async fn register(&self, registration: UserRegistration) -> Result<UserAccount, Error> {
        if registration.active.is_some() || registration.role.is_some() {
            debug!("ignoring caller-supplied active flag and role");
        }
        let email = self
            .validator
            .validate_email(&registration.email)
            .map_err(|err| invalid_account(&err))?;
        self.validator
            .validate_password(&registration.password)
            .map_err(|err| invalid_account(&err))?;

        let taken = self
            .store
            .exists_with_email(&email)
            .await
            .map_err(map_store_error)?;
        if taken {
            return Err(duplicate_account(email.as_ref()));
        }

        let account = self
            .store
            .insert(&NewUserAccount {
                email,
                password: PasswordDigest::derive(&registration.password),
                active: true,
                role: Role::StandardUser,
            })
            .await
            .map_err(map_store_error)?;
        info!(user_id = %account.id(), "account registered");
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<UserAccount, Error> {
        let not_found = || Error::not_found(format!("no account registered for {email}"));
        let Ok(email) = self.validator.validate_email(email) else {
            return Err(not_found());
        };
        self.lookup(&email).await?.ok_or_else(not_found)
    }
}

#[async_trait]
impl<U> LoginService for UserDirectoryService<U>
where
    U: UserStore,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Ok(email) = self.validator.validate_email(credentials.email()) else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        match self.lookup(&email).await? {
            Some(account)
                if account.is_active() && account.password().verify(credentials.password()) =>
            {
                Ok(account.id().clone())
            }
            _ => Err(Error::unauthorized(INVALID_CREDENTIALS)),
        }
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
