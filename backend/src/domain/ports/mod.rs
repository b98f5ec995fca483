//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`RecipeCatalog`, `UserDirectory`, `LoginService`) are
//! called by inbound adapters. Driven ports (`RecipeStore`, `UserStore`) are
//! implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod recipe_catalog;
mod recipe_store;
mod user_directory;
mod user_store;

pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use recipe_catalog::MockRecipeCatalog;
pub use recipe_catalog::RecipeCatalog;
#[cfg(test)]
pub use recipe_store::MockRecipeStore;
pub use recipe_store::{RecipeStore, RecipeStoreError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
