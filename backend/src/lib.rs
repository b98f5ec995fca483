//! Recipe-sharing backend library.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, services,
//! and port traits; [`inbound`] exposes them over HTTP; [`outbound`]
//! implements stores in memory and on PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
