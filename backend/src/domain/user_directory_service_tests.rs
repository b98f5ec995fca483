//! Tests for the user directory service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserStore;

fn service(store: MockUserStore) -> UserDirectoryService<MockUserStore> {
    UserDirectoryService::new(Arc::new(store), Arc::new(Validator::default()))
}

fn account(email: &str, password: &str, active: bool) -> UserAccount {
    UserAccount::new(
        UserId::random(),
        NewUserAccount {
            email: Email::from_trusted(email),
            password: PasswordDigest::derive(password),
            active,
            role: Role::StandardUser,
        },
    )
}

#[tokio::test]
async fn register_forces_standard_role_and_active_flag() {
    let mut store = MockUserStore::new();
    store.expect_exists_with_email().times(1).return_once(|_| Ok(false));
    store
        .expect_insert()
        .withf(|new| new.active && new.role == Role::StandardUser)
        .times(1)
        .return_once(|new| Ok(UserAccount::new(UserId::random(), new.clone())));

    let mut registration = UserRegistration::new("cook@example.com", "password1");
    registration.active = Some(false);
    registration.role = Some("ROLE_ADMIN".to_owned());

    let account = service(store)
        .register(registration)
        .await
        .expect("registration succeeds");

    assert!(account.is_active());
    assert_eq!(account.role(), Role::StandardUser);
}

#[tokio::test]
async fn register_stores_digest_not_plain_password() {
    let mut store = MockUserStore::new();
    store.expect_exists_with_email().times(1).return_once(|_| Ok(false));
    store
        .expect_insert()
        .withf(|new| new.password.hash() != "password1" && new.password.verify("password1"))
        .times(1)
        .return_once(|new| Ok(UserAccount::new(UserId::random(), new.clone())));

    service(store)
        .register(UserRegistration::new("cook@example.com", "password1"))
        .await
        .expect("registration succeeds");
}

#[rstest]
#[case("bad-email", "password1", "email")]
#[case("cook@example.com", "short", "password")]
#[case("bad-email", "short", "email")]
#[tokio::test]
async fn register_rejects_invalid_fields(
    #[case] email: &str,
    #[case] password: &str,
    #[case] field: &str,
) {
    let mut store = MockUserStore::new();
    store.expect_exists_with_email().times(0);
    store.expect_insert().times(0);

    let error = service(store)
        .register(UserRegistration::new(email, password))
        .await
        .expect_err("invalid account");

    assert_eq!(error.code(), ErrorCode::InvalidAccount);
    let details = error.details().expect("details present");
    assert_eq!(details["field"], field);
}

#[tokio::test]
async fn register_rejects_existing_email() {
    let mut store = MockUserStore::new();
    store
        .expect_exists_with_email()
        .withf(|email| email.normalized() == "x@y.com")
        .times(1)
        .return_once(|_| Ok(true));
    store.expect_insert().times(0);

    let error = service(store)
        .register(UserRegistration::new("X@Y.com", "password1"))
        .await
        .expect_err("duplicate account");

    assert_eq!(error.code(), ErrorCode::DuplicateAccount);
}

#[tokio::test]
async fn register_maps_lost_race_to_duplicate_account() {
    let mut store = MockUserStore::new();
    store.expect_exists_with_email().times(1).return_once(|_| Ok(false));
    store
        .expect_insert()
        .times(1)
        .return_once(|_| Err(UserStoreError::duplicate_email("x@y.com")));

    let error = service(store)
        .register(UserRegistration::new("x@y.com", "password1"))
        .await
        .expect_err("duplicate account");

    assert_eq!(error.code(), ErrorCode::DuplicateAccount);
}

#[tokio::test]
async fn find_by_email_returns_not_found_for_unknown_or_malformed() {
    let mut store = MockUserStore::new();
    store.expect_find_by_email().times(1).return_once(|_| Ok(None));
    let directory = service(store);

    let unknown = directory
        .find_by_email("nobody@example.com")
        .await
        .expect_err("unknown email");
    let malformed = directory
        .find_by_email("not an email")
        .await
        .expect_err("malformed email");

    assert_eq!(unknown.code(), ErrorCode::NotFound);
    assert_eq!(malformed.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn find_by_email_returns_account() {
    let stored = account("Cook@Example.com", "password1", true);
    let expected = stored.clone();
    let mut store = MockUserStore::new();
    store
        .expect_find_by_email()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));

    let found = service(store)
        .find_by_email("cook@example.com")
        .await
        .expect("account found");

    assert_eq!(found, expected);
}

#[tokio::test]
async fn authenticate_accepts_matching_password() {
    let stored = account("cook@example.com", "password1", true);
    let expected = stored.id().clone();
    let mut store = MockUserStore::new();
    store
        .expect_find_by_email()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));

    let credentials =
        LoginCredentials::try_from_parts("cook@example.com", "password1").expect("credentials");
    let id = service(store)
        .authenticate(&credentials)
        .await
        .expect("authenticated");

    assert_eq!(id, expected);
}

#[rstest]
#[case(Some(("cook@example.com", "password1", true)), "wrong-password")]
#[case(Some(("cook@example.com", "password1", false)), "password1")]
#[case(None, "password1")]
#[tokio::test]
async fn authenticate_fails_uniformly(
    #[case] stored: Option<(&'static str, &'static str, bool)>,
    #[case] presented: &str,
) {
    let stored = stored.map(|(email, password, active)| account(email, password, active));
    let mut store = MockUserStore::new();
    store
        .expect_find_by_email()
        .times(1)
        .return_once(move |_| Ok(stored));

    let credentials =
        LoginCredentials::try_from_parts("cook@example.com", presented).expect("credentials");
    let error = service(store)
        .authenticate(&credentials)
        .await
        .expect_err("rejected");

    assert_eq!(error.code(), ErrorCode::Unauthorized);
    assert_eq!(error.message(), INVALID_CREDENTIALS);
}

#[tokio::test]
async fn store_outage_surfaces_as_service_unavailable() {
    let mut store = MockUserStore::new();
    store
        .expect_exists_with_email()
        .times(1)
        .return_once(|_| Err(UserStoreError::connection("pool closed")));

    let error = service(store)
        .register(UserRegistration::new("cook@example.com", "password1"))
        .await
        .expect_err("store outage");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
