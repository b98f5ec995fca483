//! PostgreSQL-backed `RecipeStore` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecipeStore, RecipeStoreError};
use crate::domain::{Recipe, RecipeContent, RecipeDraft, RecipeFilter, RecipeId, RecipeWrite, UserId};

use super::diesel_helpers::{LIKE_ESCAPE, contains_pattern, lower, map_diesel_error, map_pool_error};
use super::models::{NewRecipeRow, RecipeChangeset, RecipeRow};
use super::pool::DbPool;
use super::schema::recipes;

/// Diesel-backed recipe store.
///
/// `updated_at` is set by the database on insert and refreshed with `now()`
/// on every update.
#[derive(Clone)]
pub struct DieselRecipeStore {
    pool: DbPool,
}

impl DieselRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> RecipeStoreError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            RecipeStoreError::query,
            RecipeStoreError::connection,
        )
    }
}

fn row_to_recipe(row: RecipeRow) -> Recipe {
    let content = RecipeContent::from_stored(RecipeDraft {
        name: row.name,
        description: row.description,
        ingredients: row.ingredients,
        directions: row.directions,
        category: row.category,
    });
    Recipe::new(
        RecipeId::new(row.id),
        content,
        row.updated_at,
        row.author_id.map(UserId::from_uuid),
    )
}

#[async_trait]
impl RecipeStore for DieselRecipeStore {
    async fn save(&self, write: &RecipeWrite) -> Result<Recipe, RecipeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecipeStoreError::connection))?;
        let content = &write.content;

        let row = match write.id {
            None => {
                let new_row = NewRecipeRow {
                    name: content.name(),
                    description: content.description(),
                    ingredients: content.ingredients(),
                    directions: content.directions(),
                    category: content.category(),
                    author_id: write.author.as_ref().map(|id| *id.as_uuid()),
                };
                diesel::insert_into(recipes::table)
                    .values(&new_row)
                    .returning(RecipeRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(diesel_error("insert recipe"))?
            }
            Some(id) => {
                let changes = RecipeChangeset {
                    name: content.name(),
                    description: content.description(),
                    ingredients: content.ingredients(),
                    directions: content.directions(),
                    category: content.category(),
                };
                diesel::update(recipes::table.find(id.get()))
                    .set((&changes, recipes::updated_at.eq(diesel::dsl::now)))
                    .returning(RecipeRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .optional()
                    .map_err(diesel_error("update recipe"))?
                    .ok_or_else(|| RecipeStoreError::missing(id))?
            }
        };

        Ok(row_to_recipe(row))
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecipeStoreError::connection))?;

        let row = recipes::table
            .find(id.get())
            .select(RecipeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find recipe"))?;

        Ok(row.map(row_to_recipe))
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, RecipeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecipeStoreError::connection))?;

        let removed = diesel::delete(recipes::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error("delete recipe"))?;

        Ok(removed > 0)
    }

    async fn find_matching(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecipeStoreError::connection))?;

        let query = recipes::table
            .select(RecipeRow::as_select())
            .order((recipes::updated_at.desc(), recipes::id.desc()))
            .into_boxed();
        let query = match filter {
            RecipeFilter::CategoryEquals(category) => {
                query.filter(lower(recipes::category).eq(category.to_lowercase()))
            }
            RecipeFilter::NameContains(fragment) => query.filter(
                lower(recipes::name)
                    .like(contains_pattern(&fragment.to_lowercase()))
                    .escape(LIKE_ESCAPE),
            ),
        };

        let rows = query
            .load(&mut conn)
            .await
            .map_err(diesel_error("search recipes"))?;

        Ok(rows.into_iter().map(row_to_recipe).collect())
    }
}
