//! Shared helpers for the Diesel store adapters.
//!
//! - `lower` exposes the SQL function used for case-insensitive matching.
//! - `contains_pattern` builds an escaped `LIKE` pattern.
//! - `map_pool_error` / `map_diesel_error` translate infrastructure failures
//!   into a store's connection/query constructors.

use diesel::sql_types::Text;
use tracing::debug;

use super::pool::PoolError;

diesel::define_sql_function! {
    /// SQL `lower(text)`.
    fn lower(x: Text) -> Text;
}

/// Escape character used with `LIKE ... ESCAPE`.
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Build a `%fragment%` pattern with `LIKE` wildcards in `fragment` escaped.
pub(crate) fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Map pool errors into a store-specific connection error.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
///
/// Database messages are logged at debug level and replaced by a generic
/// message so SQL detail does not reach callers.
pub(crate) fn map_diesel_error<E>(
    error: diesel::result::Error,
    operation: &str,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection(format!("{operation}: database connection error"))
        }
        DieselError::NotFound => query(format!("{operation}: record not found")),
        DieselError::QueryBuilderError(_) => query(format!("{operation}: database query error")),
        _ => query(format!("{operation}: database error")),
    }
}
