//! Driving port for recipe use-cases.

use async_trait::async_trait;

use crate::domain::{Actor, Error, Recipe, RecipeDraft, RecipeId, SearchParams};

/// Recipe catalog operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Validate and persist a new recipe, returning its identity.
    async fn create(&self, draft: RecipeDraft, actor: &Actor) -> Result<RecipeId, Error>;

    /// Fetch a recipe by identity.
    async fn get(&self, id: RecipeId) -> Result<Recipe, Error>;

    /// Search by exactly one of category or name.
    async fn search(&self, params: SearchParams) -> Result<Vec<Recipe>, Error>;

    /// Replace every mutable field of an existing recipe.
    async fn update(&self, id: RecipeId, draft: RecipeDraft, actor: &Actor) -> Result<(), Error>;

    /// Permanently remove a recipe.
    async fn delete(&self, id: RecipeId, actor: &Actor) -> Result<(), Error>;
}
