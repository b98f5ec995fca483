//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Conversion into domain
//! types happens in the store adapters.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{recipes, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub active: bool,
    pub role: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_salt: &'a str,
    pub password_hash: &'a str,
    pub active: bool,
    pub role: &'a str,
}

/// Row struct for reading from the recipes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub category: String,
    pub author_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable recipe; `id` and `updated_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub ingredients: &'a [String],
    pub directions: &'a [String],
    pub category: &'a str,
    pub author_id: Option<Uuid>,
}

/// Full-replacement changeset. The author column is never touched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub ingredients: &'a [String],
    pub directions: &'a [String],
    pub category: &'a str,
}
