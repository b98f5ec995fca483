//! Driven port for recipe persistence.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeFilter, RecipeId, RecipeWrite};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe store adapters.
    pub enum RecipeStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "recipe store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe store query failed: {message}",
        /// An update targeted a recipe that no longer exists.
        Missing { id: RecipeId } => "recipe {id} does not exist",
    }
}

/// Key-based recipe persistence.
///
/// Adapters stamp the modification time on every successful `save` and
/// return matches newest first, breaking ties by descending identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert when `write.id` is `None`, otherwise replace the stored recipe.
    async fn save(&self, write: &RecipeWrite) -> Result<Recipe, RecipeStoreError>;

    /// Fetch a recipe by identity.
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipeStoreError>;

    /// Remove a recipe. Returns `false` when nothing was removed.
    async fn delete(&self, id: RecipeId) -> Result<bool, RecipeStoreError>;

    /// List every recipe matching `filter`, newest first.
    async fn find_matching(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeStoreError>;
}
