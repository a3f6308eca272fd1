//! moviedb - an in-memory movie catalogue behind a JSON REST API
//!
//! The catalogue is seeded once from a JSON file at startup and lives only
//! for the lifetime of the process.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
