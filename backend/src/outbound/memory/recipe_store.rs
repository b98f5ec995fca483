//! In-memory `RecipeStore` adapter.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;

use crate::domain::ports::{RecipeStore, RecipeStoreError};
use crate::domain::{Recipe, RecipeFilter, RecipeId, RecipeWrite};

#[derive(Default)]
struct State {
    next_id: i64,
    recipes: BTreeMap<RecipeId, Recipe>,
}

/// Recipe store keeping every recipe in a map keyed by identity.
#[derive(Clone)]
pub struct InMemoryRecipeStore {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRecipeStore {
    /// Create an empty store stamping writes with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            clock,
        }
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn save(&self, write: &RecipeWrite) -> Result<Recipe, RecipeStoreError> {
        let mut state = self.state.write().await;
        let id = match write.id {
            Some(id) if state.recipes.contains_key(&id) => id,
            Some(id) => return Err(RecipeStoreError::missing(id)),
            None => {
                state.next_id += 1;
                RecipeId::new(state.next_id)
            }
        };
        let recipe = Recipe::new(
            id,
            write.content.clone(),
            self.clock.utc(),
            write.author.clone(),
        );
        state.recipes.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipeStoreError> {
        Ok(self.state.read().await.recipes.get(&id).cloned())
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, RecipeStoreError> {
        Ok(self.state.write().await.recipes.remove(&id).is_some())
    }

    async fn find_matching(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeStoreError> {
        let state = self.state.read().await;
        let mut matches: Vec<Recipe> = state
            .recipes
            .values()
            .filter(|recipe| filter.matches(recipe.content()))
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.modified_at()
                .cmp(&a.modified_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(matches)
    }
}
