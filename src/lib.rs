//! Advertising Platform Search Library
//!
//! Core modules behind the binary executable (`main.rs`).
//!
//! ## Modules
//! - **`index`**: The location index engine. Builds, publishes and queries
//!   immutable generations of the platform catalogue.
//! - **`catalogue`**: The data intake pipeline. Parses catalogue text into
//!   platform records and triggers index rebuilds.
//! - **`config`**: Command-line configuration for the server.

pub mod catalogue;
pub mod config;
pub mod index;

use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;

use catalogue::handlers::handle_load;
use index::engine::LocationIndex;
use index::handlers::handle_search;

pub const ENDPOINT_LOAD: &str = "/api/platforms/load";
pub const ENDPOINT_SEARCH: &str = "/api/platforms/search";

/// Builds the HTTP router serving `index`.
pub fn router(index: Arc<LocationIndex>) -> Router {
    Router::new()
        .route(ENDPOINT_LOAD, post(handle_load))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .layer(Extension(index))
}
