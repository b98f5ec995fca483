//! PostgreSQL-backed `UserStore` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Email, NewUserAccount, PasswordDigest, Role, UserAccount, UserId};

use super::diesel_helpers::{lower, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed user store.
///
/// Uniqueness of `lower(email)` is enforced by a database index; a violation
/// surfaces as [`UserStoreError::DuplicateEmail`].
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(operation: &'static str) -> impl FnOnce(DieselError) -> UserStoreError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            UserStoreError::query,
            UserStoreError::connection,
        )
    }
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserStoreError> {
    let Some(role) = Role::parse(&row.role) else {
        warn!(user_id = %row.id, role = %row.role, "unrecognised stored role");
        return Err(UserStoreError::query(format!(
            "account {} has unrecognised role",
            row.id
        )));
    };
    Ok(UserAccount::new(
        UserId::from_uuid(row.id),
        NewUserAccount {
            email: Email::from_trusted(row.email),
            password: PasswordDigest::from_parts(row.password_salt, row.password_hash),
            active: row.active,
            role,
        },
    ))
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn insert(&self, account: &NewUserAccount) -> Result<UserAccount, UserStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserStoreError::connection))?;

        let new_row = NewUserRow {
            id: Uuid::new_v4(),
            email: account.email.as_ref(),
            password_salt: account.password.salt(),
            password_hash: account.password.hash(),
            active: account.active,
            role: account.role.as_str(),
        };

        let row = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match err {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    UserStoreError::duplicate_email(account.email.as_ref())
                }
                other => diesel_error("insert user")(other),
            })?;

        row_to_account(row)
    }

    async fn exists_with_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserStoreError::connection))?;

        diesel::select(diesel::dsl::exists(
            users::table.filter(lower(users::email).eq(email.normalized())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(diesel_error("check user email"))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, UserStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserStoreError::connection))?;

        let row = users::table
            .filter(lower(users::email).eq(email.normalized()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find user"))?;

        row.map(row_to_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion.
    use super::*;
    use rstest::rstest;

    fn row(role: &str) -> UserRow {
        let digest = PasswordDigest::derive("password1");
        UserRow {
            id: Uuid::new_v4(),
            email: "Cook@Example.com".to_owned(),
            password_salt: digest.salt().to_owned(),
            password_hash: digest.hash().to_owned(),
            active: true,
            role: role.to_owned(),
        }
    }

    #[rstest]
    fn row_conversion_restores_digest() {
        let account = row_to_account(row("ROLE_USER")).expect("known role");
        assert_eq!(account.email().as_ref(), "Cook@Example.com");
        assert_eq!(account.role(), Role::StandardUser);
        assert!(account.password().verify("password1"));
    }

    #[rstest]
    fn unknown_role_is_a_query_error() {
        let err = row_to_account(row("ROLE_ROOT")).expect_err("unknown role");
        assert!(matches!(err, UserStoreError::Query { .. }));
    }
}
