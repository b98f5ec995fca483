//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the recipe, registration, and health endpoints, the
//! wire DTOs, and the HTTP Basic security scheme. Paths show the default
//! prefixes; deployments that move them via settings keep the same shapes.
//!
//! The document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::recipes::{CreatedRecipeResponse, RecipeRequest, RecipeResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::RegisterRequest;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the Basic security scheme in the generated document.
pub const BASIC_AUTH_SCHEME: &str = "BasicAuth";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BASIC_AUTH_SCHEME,
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Recipes backend API",
        description = "Recipe sharing with HTTP Basic authentication and per-author ownership."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BasicAuth" = [])),
    paths(
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::recipes::search_recipes,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::users::register,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RecipeRequest,
        RecipeResponse,
        CreatedRecipeResponse,
        RegisterRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "recipes", description = "Create, search, and maintain recipes"),
        (name = "users", description = "Account registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
