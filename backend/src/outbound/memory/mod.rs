//! In-process store adapters.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. State lives behind a `tokio::sync::RwLock` and disappears with the
//! process.

mod recipe_store;
mod user_store;

pub use recipe_store::InMemoryRecipeStore;
pub use user_store::InMemoryUserStore;
