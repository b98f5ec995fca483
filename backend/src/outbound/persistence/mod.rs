//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Store implementations only translate between Diesel rows and domain
//! types. Connections come from a `bb8` pool through `diesel-async`; schema
//! changes are applied from embedded migrations at startup.
//!
//! # Example
//!
//! ```ignore
//! use recipes_backend::outbound::persistence::{DbPool, DieselRecipeStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let store = DieselRecipeStore::new(pool);
//! ```

mod diesel_helpers;
mod diesel_recipe_store;
mod diesel_user_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_recipe_store::DieselRecipeStore;
pub use diesel_user_store::DieselUserStore;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
