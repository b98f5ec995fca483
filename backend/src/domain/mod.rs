//! Domain primitives, services, and ports.
//!
//! Purpose: define the recipe and account entities, the validator, and the
//! two services that enforce ownership and registration rules. Nothing here
//! knows about HTTP or SQL; adapters reach the domain through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Recipe, RecipeDraft, RecipeContent, RecipeFilter: recipe model.
//! - UserAccount, UserRegistration, Email, Role: account model.
//! - Validator: field checks shared by both services.
//! - RecipeCatalogService / UserDirectoryService: driving-port implementations.

pub mod auth;
pub mod error;
pub mod password;
pub mod ports;
pub mod recipe;
pub mod recipe_catalog_service;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;
pub mod validation;

pub use self::auth::{AccessPolicy, Actor, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::password::PasswordDigest;
pub use self::recipe::{
    Recipe, RecipeContent, RecipeDraft, RecipeFilter, RecipeId, RecipeWrite, SearchParams,
    SearchQueryError,
};
pub use self::recipe_catalog_service::RecipeCatalogService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Email, NewUserAccount, Role, UserAccount, UserId, UserRegistration, UserValidationError,
};
pub use self::user_directory_service::UserDirectoryService;
pub use self::validation::{
    DEFAULT_PASSWORD_MIN_LENGTH, RecipeValidationError, ValidationRules, Validator,
};
