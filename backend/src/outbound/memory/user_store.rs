//! In-memory `UserStore` adapter.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Email, NewUserAccount, UserAccount, UserId};

/// User store keyed by lower-cased email.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    accounts: Arc<RwLock<HashMap<String, UserAccount>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, account: &NewUserAccount) -> Result<UserAccount, UserStoreError> {
        let key = account.email.normalized();
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(UserStoreError::duplicate_email(account.email.as_ref()));
        }
        let stored = UserAccount::new(UserId::random(), account.clone());
        accounts.insert(key, stored.clone());
        Ok(stored)
    }

    async fn exists_with_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        Ok(self.accounts.read().await.contains_key(&email.normalized()))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, UserStoreError> {
        Ok(self.accounts.read().await.get(&email.normalized()).cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{PasswordDigest, Role};
    use rstest::rstest;

    fn new_account(email: &str) -> NewUserAccount {
        NewUserAccount {
            email: Email::from_trusted(email),
            password: PasswordDigest::derive("password1"),
            active: true,
            role: Role::StandardUser,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_ignore_case_and_keep_original_email() {
        let store = InMemoryUserStore::new();
        let stored = store.insert(&new_account("Cook@Example.com")).await.expect("insert");

        let probe = Email::from_trusted("COOK@example.COM");
        assert!(store.exists_with_email(&probe).await.expect("exists"));
        let found = store.find_by_email(&probe).await.expect("find").expect("present");
        assert_eq!(found.id(), stored.id());
        assert_eq!(found.email().as_ref(), "Cook@Example.com");
    }

    #[rstest]
    #[tokio::test]
    async fn insert_guards_case_insensitive_uniqueness() {
        let store = InMemoryUserStore::new();
        store.insert(&new_account("X@Y.com")).await.expect("first insert");

        let err = store
            .insert(&new_account("x@y.com"))
            .await
            .expect_err("duplicate");

        assert_eq!(err, UserStoreError::duplicate_email("x@y.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_email_is_absent() {
        let store = InMemoryUserStore::new();
        let probe = Email::from_trusted("nobody@example.com");
        assert!(!store.exists_with_email(&probe).await.expect("exists"));
        assert!(store.find_by_email(&probe).await.expect("find").is_none());
    }
}
