//! Shared wiring for integration tests.
#![allow(dead_code, reason = "each test binary uses a different subset")]

pub mod embedded_postgres;

use std::sync::{Arc, Mutex};

use actix_web::web;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use recipes_backend::domain::{
    AccessPolicy, RecipeCatalogService, RecipeDraft, UserDirectoryService, Validator,
};
use recipes_backend::inbound::http::state::HttpState;
use recipes_backend::outbound::memory::{InMemoryRecipeStore, InMemoryUserStore};
use serde_json::{Value, json};

/// Clock advancing one second on every read, so writes get distinct stamps.
pub struct TickingClock(Mutex<DateTime<Utc>>);

impl TickingClock {
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
            .single()
            .expect("fixed start instant");
        Self(Mutex::new(start))
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.0.lock().expect("clock mutex");
        *now += TimeDelta::seconds(1);
        *now
    }
}

pub type Catalog = RecipeCatalogService<InMemoryRecipeStore>;
pub type Directory = UserDirectoryService<InMemoryUserStore>;

/// Services over fresh in-memory stores.
pub fn services(policy: AccessPolicy) -> (Catalog, Directory) {
    let validator = Arc::new(Validator::default());
    let recipes = InMemoryRecipeStore::new(Arc::new(TickingClock::new()));
    let catalog = RecipeCatalogService::new(Arc::new(recipes), validator.clone(), policy);
    let directory = UserDirectoryService::new(Arc::new(InMemoryUserStore::new()), validator);
    (catalog, directory)
}

/// HTTP state wired the way the server wires it without a database.
pub fn http_state(policy: AccessPolicy) -> web::Data<HttpState> {
    let (catalog, directory) = services(policy);
    let directory = Arc::new(directory);
    web::Data::new(HttpState::new(
        Arc::new(catalog),
        directory.clone(),
        directory,
        policy.requires_authentication(),
    ))
}

pub fn basic_auth(email: &str, password: &str) -> (&'static str, String) {
    (
        "Authorization",
        format!("Basic {}", STANDARD.encode(format!("{email}:{password}"))),
    )
}

pub fn draft(name: &str, category: &str) -> RecipeDraft {
    RecipeDraft {
        name: name.to_owned(),
        description: format!("{name}, as made at home"),
        ingredients: vec!["water".to_owned(), "salt".to_owned()],
        directions: vec!["Combine".to_owned(), "Serve".to_owned()],
        category: category.to_owned(),
    }
}

pub fn recipe_json(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "category": category,
        "description": format!("{name}, as made at home"),
        "ingredients": ["water", "salt"],
        "directions": ["Combine", "Serve"]
    })
}
