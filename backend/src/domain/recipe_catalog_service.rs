//! Recipe catalog service.
//!
//! Implements the [`RecipeCatalog`] driving port on top of a [`RecipeStore`].
//! Under [`AccessPolicy::Owned`] every mutation needs an authenticated actor
//! and only the recorded author may update or delete a recipe.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{RecipeCatalog, RecipeStore, RecipeStoreError};
use crate::domain::{
    AccessPolicy, Actor, Error, Recipe, RecipeContent, RecipeDraft, RecipeFilter, RecipeId,
    RecipeWrite, SearchParams, UserId, Validator,
};

fn map_store_error(error: RecipeStoreError) -> Error {
    match error {
        RecipeStoreError::Connection { message } => {
            Error::service_unavailable(format!("recipe store unavailable: {message}"))
        }
        RecipeStoreError::Query { message } => {
            Error::internal(format!("recipe store error: {message}"))
        }
        RecipeStoreError::Missing { id } => recipe_not_found(id),
    }
}

fn recipe_not_found(id: RecipeId) -> Error {
    Error::not_found(format!("recipe {id} not found"))
}

/// Recipe catalog backed by a recipe store.
#[derive(Clone)]
pub struct RecipeCatalogService<S> {
    store: Arc<S>,
    validator: Arc<Validator>,
    policy: AccessPolicy,
}

impl<S> RecipeCatalogService<S> {
    pub fn new(store: Arc<S>, validator: Arc<Validator>, policy: AccessPolicy) -> Self {
        Self {
            store,
            validator,
            policy,
        }
    }

    /// Resolve the user a mutation runs as. `Open` never has one.
    fn acting_user<'a>(&self, actor: &'a Actor) -> Result<Option<&'a UserId>, Error> {
        match self.policy {
            AccessPolicy::Open => Ok(None),
            AccessPolicy::Owned => actor
                .user_id()
                .map(Some)
                .ok_or_else(|| Error::unauthorized("authentication required")),
        }
    }

    fn validate(&self, draft: RecipeDraft) -> Result<RecipeContent, Error> {
        self.validator.validate_recipe(draft).map_err(|err| {
            Error::invalid_recipe(format!("invalid recipe: {err}")).with_details(err.details())
        })
    }
}

impl<S> RecipeCatalogService<S>
where
    S: RecipeStore,
{
    async fn fetch(&self, id: RecipeId) -> Result<Recipe, Error> {
        self.store
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| recipe_not_found(id))
    }

    /// Fetch the recipe and check `user` may mutate it.
    async fn fetch_owned(&self, id: RecipeId, user: Option<&UserId>) -> Result<Recipe, Error> {
        let recipe = self.fetch(id).await?;
        match user {
            Some(user) if !recipe.is_authored_by(user) => {
                warn!(recipe_id = %id, user_id = %user, "rejected mutation by non-author");
                Err(Error::forbidden(format!(
                    "recipe {id} may only be changed by its author"
                )))
            }
            _ => Ok(recipe),
        }
    }
}

#[async_trait]
impl<S> RecipeCatalog for RecipeCatalogService<S>
where
    S: RecipeStore,
{
    async fn create(&self, draft: RecipeDraft, actor: &Actor) -> Result<RecipeId, Error> {
        let author = self.acting_user(actor)?.cloned();
        let content = self.validate(draft)?;
        let saved = self
            .store
            .save(&RecipeWrite {
                id: None,
                author,
                content,
            })
            .await
            .map_err(map_store_error)?;
        info!(recipe_id = %saved.id(), "recipe created");
        Ok(saved.id())
    }

    async fn get(&self, id: RecipeId) -> Result<Recipe, Error> {
        self.fetch(id).await
    }

    async fn search(&self, params: SearchParams) -> Result<Vec<Recipe>, Error> {
        let filter = RecipeFilter::from_params(&params)
            .map_err(|err| Error::invalid_query(format!("invalid search: {err}")))?;
        self.store
            .find_matching(&filter)
            .await
            .map_err(map_store_error)
    }

    async fn update(&self, id: RecipeId, draft: RecipeDraft, actor: &Actor) -> Result<(), Error> {
        let user = self.acting_user(actor)?;
        let existing = self.fetch_owned(id, user).await?;
        let content = self.validate(draft)?;
        self.store
            .save(&RecipeWrite {
                id: Some(id),
                author: existing.author().cloned(),
                content,
            })
            .await
            .map_err(map_store_error)?;
        info!(recipe_id = %id, "recipe updated");
        Ok(())
    }

    async fn delete(&self, id: RecipeId, actor: &Actor) -> Result<(), Error> {
        let user = self.acting_user(actor)?;
        self.fetch_owned(id, user).await?;
        let removed = self.store.delete(id).await.map_err(map_store_error)?;
        if !removed {
            return Err(recipe_not_found(id));
        }
        info!(recipe_id = %id, "recipe deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "recipe_catalog_service_tests.rs"]
mod tests;
