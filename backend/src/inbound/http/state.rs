//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports,
//! so tests can swap in mocks without wiring stores.

use std::sync::Arc;

use crate::domain::ports::{LoginService, RecipeCatalog, UserDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recipes: Arc<dyn RecipeCatalog>,
    pub users: Arc<dyn UserDirectory>,
    pub login: Arc<dyn LoginService>,
    /// When false, recipe routes skip credential checks entirely.
    pub auth_enabled: bool,
}

impl HttpState {
    pub fn new(
        recipes: Arc<dyn RecipeCatalog>,
        users: Arc<dyn UserDirectory>,
        login: Arc<dyn LoginService>,
        auth_enabled: bool,
    ) -> Self {
        Self {
            recipes,
            users,
            login,
            auth_enabled,
        }
    }
}
