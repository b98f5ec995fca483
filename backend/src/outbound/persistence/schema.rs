//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `lower(email)` carries a unique index.
    users (id) {
        id -> Uuid,
        email -> Text,
        password_salt -> Text,
        password_hash -> Text,
        active -> Bool,
        role -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Recipes. `author_id` is null for recipes created without
    /// authentication.
    recipes (id) {
        id -> Int8,
        name -> Text,
        description -> Text,
        ingredients -> Array<Text>,
        directions -> Array<Text>,
        category -> Text,
        author_id -> Nullable<Uuid>,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(recipes -> users (author_id));
diesel::allow_tables_to_appear_in_same_query!(recipes, users);
