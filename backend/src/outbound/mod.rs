//! Outbound adapters implementing the driven store ports.
//!
//! - **memory**: process-local stores used when no database is configured
//! - **persistence**: PostgreSQL stores using Diesel ORM
//!
//! Adapters translate between domain types and storage representations and
//! contain no business rules.

pub mod memory;
pub mod persistence;
