//! # moviedb HTTP Server Module
//!
//! Axum server exposing the movie store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/` - List and create movies
//! - `/:id/` - Read, replace and delete a movie

pub mod config;
pub mod errors;
pub mod movie_routes;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse, MOVIE_NOT_FOUND};
pub use server::{build_router, HttpServer};
pub use state::MovieState;
