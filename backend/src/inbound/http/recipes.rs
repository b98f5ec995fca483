//! Recipe HTTP handlers.
//!
//! ```text
//! POST   {recipe_path}/new
//! GET    {recipe_path}/search?category=..|name=..
//! GET    {recipe_path}/{id}
//! PUT    {recipe_path}/{id}
//! DELETE {recipe_path}/{id}
//! ```
//!
//! Routes are registered by [`super::configure_api`] under a configurable
//! prefix; the paths in the OpenAPI annotations show the defaults.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Recipe, RecipeDraft, RecipeId, SearchParams};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::ActingUser;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Recipe payload for create and full-replacement update.
///
/// Missing or null fields are treated as empty so validation reports which
/// field is wrong. Unknown fields, including `id` and `date`, are ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RecipeRequest {
    #[schema(example = "Fresh Mint Tea")]
    pub name: Option<String>,
    #[schema(example = "beverage")]
    pub category: Option<String>,
    #[schema(example = "Light, aromatic and refreshing beverage")]
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub directions: Option<Vec<String>>,
}

impl From<RecipeRequest> for RecipeDraft {
    fn from(value: RecipeRequest) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            ingredients: value.ingredients.unwrap_or_default(),
            directions: value.directions.unwrap_or_default(),
            category: value.category.unwrap_or_default(),
        }
    }
}

/// Recipe as returned to clients. Identity and author are not exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub name: String,
    pub category: String,
    /// Last modification time, RFC 3339.
    #[schema(example = "2024-05-01T12:00:00+00:00")]
    pub date: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(value: Recipe) -> Self {
        let content = value.content();
        Self {
            name: content.name().to_owned(),
            category: content.category().to_owned(),
            date: value.modified_at().to_rfc3339(),
            description: content.description().to_owned(),
            ingredients: content.ingredients().to_vec(),
            directions: content.directions().to_vec(),
        }
    }
}

/// Identity of a newly created recipe.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedRecipeResponse {
    #[schema(example = 1)]
    pub id: i64,
}

/// Search parameters; exactly one must be supplied.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact category, ignoring case.
    pub category: Option<String>,
    /// Substring of the name, ignoring case.
    pub name: Option<String>,
}

impl From<SearchQuery> for SearchParams {
    fn from(value: SearchQuery) -> Self {
        Self {
            category: value.category,
            name: value.name,
        }
    }
}

/// Create a recipe owned by the caller.
#[utoipa::path(
    post,
    path = "/api/recipe/new",
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe created", body = CreatedRecipeResponse),
        (status = 400, description = "Invalid recipe", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    caller: ActingUser,
    payload: web::Json<RecipeRequest>,
) -> ApiResult<web::Json<CreatedRecipeResponse>> {
    let id = state
        .recipes
        .create(payload.into_inner().into(), &caller.into_actor())
        .await?;
    Ok(web::Json(CreatedRecipeResponse { id: id.get() }))
}

/// Fetch a recipe by identity.
#[utoipa::path(
    get,
    path = "/api/recipe/{id}",
    params(("id" = i64, Path, description = "Recipe identity")),
    responses(
        (status = 200, description = "Recipe", body = RecipeResponse),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    _caller: ActingUser,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let recipe = state.recipes.get(RecipeId::new(path.into_inner())).await?;
    Ok(web::Json(recipe.into()))
}

/// Search recipes by category or name, newest first.
#[utoipa::path(
    get,
    path = "/api/recipe/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching recipes", body = [RecipeResponse]),
        (status = 400, description = "Invalid search", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipes"
)]
pub async fn search_recipes(
    state: web::Data<HttpState>,
    _caller: ActingUser,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let recipes = state.recipes.search(query.into_inner().into()).await?;
    Ok(web::Json(recipes.into_iter().map(Into::into).collect()))
}

/// Replace every field of a recipe the caller authored.
#[utoipa::path(
    put,
    path = "/api/recipe/{id}",
    params(("id" = i64, Path, description = "Recipe identity")),
    request_body = RecipeRequest,
    responses(
        (status = 204, description = "Recipe updated"),
        (status = 400, description = "Invalid recipe", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Caller is not the author", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    caller: ActingUser,
    path: web::Path<i64>,
    payload: web::Json<RecipeRequest>,
) -> ApiResult<HttpResponse> {
    state
        .recipes
        .update(
            RecipeId::new(path.into_inner()),
            payload.into_inner().into(),
            &caller.into_actor(),
        )
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a recipe the caller authored.
#[utoipa::path(
    delete,
    path = "/api/recipe/{id}",
    params(("id" = i64, Path, description = "Recipe identity")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Caller is not the author", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    caller: ActingUser,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .recipes
        .delete(RecipeId::new(path.into_inner()), &caller.into_actor())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
