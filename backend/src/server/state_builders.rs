//! Builders wiring stores and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use recipes_backend::domain::ports::{RecipeStore, UserStore};
use recipes_backend::domain::{RecipeCatalogService, UserDirectoryService, Validator};
use recipes_backend::inbound::http::state::HttpState;
use recipes_backend::outbound::memory::{InMemoryRecipeStore, InMemoryUserStore};
use recipes_backend::outbound::persistence::{DieselRecipeStore, DieselUserStore};

use super::ServerConfig;

fn assemble<R, U>(config: &ServerConfig, recipes: R, users: U) -> HttpState
where
    R: RecipeStore + 'static,
    U: UserStore + 'static,
{
    let validator = Arc::new(Validator::new(config.rules));
    let catalog = RecipeCatalogService::new(Arc::new(recipes), validator.clone(), config.policy);
    let directory = Arc::new(UserDirectoryService::new(Arc::new(users), validator));
    HttpState::new(
        Arc::new(catalog),
        directory.clone(),
        directory,
        config.policy.requires_authentication(),
    )
}

/// Build HTTP state over PostgreSQL when a pool is configured, memory otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => assemble(
            config,
            DieselRecipeStore::new(pool.clone()),
            DieselUserStore::new(pool.clone()),
        ),
        None => {
            info!("no database configured; using in-memory stores");
            assemble(
                config,
                InMemoryRecipeStore::new(Arc::new(DefaultClock)),
                InMemoryUserStore::new(),
            )
        }
    };
    web::Data::new(state)
}
