//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod recipes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

use crate::domain::Error;

pub use error::ApiResult;

/// Default prefix for recipe routes.
pub const DEFAULT_RECIPE_PATH: &str = "/api/recipe";
/// Default path of the registration endpoint.
pub const DEFAULT_REGISTER_PATH: &str = "/api/register";

/// Route prefixes for the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPaths {
    pub recipe: String,
    pub register: String,
}

impl Default for ApiPaths {
    fn default() -> Self {
        Self {
            recipe: DEFAULT_RECIPE_PATH.to_owned(),
            register: DEFAULT_REGISTER_PATH.to_owned(),
        }
    }
}

fn json_config(reject: fn(String) -> Error) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, _req| {
        reject(format!("malformed request body: {err}")).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_query(format!("malformed query string: {err}")).into()
    })
}

/// Register recipe and registration routes under `paths`.
///
/// Expects `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use recipes_backend::inbound::http::{ApiPaths, configure_api};
///
/// let paths = ApiPaths::default();
/// let _app = App::new().configure(|cfg| configure_api(cfg, &paths));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig, paths: &ApiPaths) {
    cfg.service(
        web::scope(&paths.recipe)
            .app_data(json_config(|message| Error::invalid_recipe(message)))
            .app_data(query_config())
            .route("/new", web::post().to(recipes::create_recipe))
            .route("/search", web::get().to(recipes::search_recipes))
            .route(r"/{id:\d+}", web::get().to(recipes::get_recipe))
            .route(r"/{id:\d+}", web::put().to(recipes::update_recipe))
            .route(r"/{id:\d+}", web::delete().to(recipes::delete_recipe)),
    )
    .service(
        web::resource(paths.register.as_str())
            .app_data(json_config(|message| Error::invalid_account(message)))
            .route(web::post().to(users::register)),
    );
}
