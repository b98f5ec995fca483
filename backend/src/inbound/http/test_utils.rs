//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::ports::{MockLoginService, MockRecipeCatalog, MockUserDirectory};

use super::state::HttpState;
use super::{ApiPaths, configure_api};

/// HTTP state plus route prefixes, ready to configure a test `App`.
pub struct TestApi {
    pub state: web::Data<HttpState>,
    pub paths: ApiPaths,
}

impl TestApi {
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.state.clone());
        configure_api(cfg, &self.paths);
    }
}

/// Wire mocked driving ports into an app using the default paths.
pub fn test_api(
    recipes: MockRecipeCatalog,
    users: MockUserDirectory,
    login: MockLoginService,
    auth_enabled: bool,
) -> TestApi {
    TestApi {
        state: web::Data::new(HttpState::new(
            Arc::new(recipes),
            Arc::new(users),
            Arc::new(login),
            auth_enabled,
        )),
        paths: ApiPaths::default(),
    }
}

/// `Authorization` header for HTTP Basic credentials.
pub fn basic_auth(email: &str, password: &str) -> (&'static str, String) {
    (
        "Authorization",
        format!("Basic {}", STANDARD.encode(format!("{email}:{password}"))),
    )
}
