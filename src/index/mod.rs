//! Location Index Module
//!
//! The core of the service: turns a flat list of platform records into an index
//! from location path to eligible platforms, and answers location queries.
//!
//! ## Matching
//! A platform registered at `R` is eligible at location `L` when `R` is a string
//! prefix of `L`. Eligibility is computed once per rebuild, and only for locations
//! that appear verbatim in the catalogue. Queries are exact key lookups.
//!
//! ## Concurrency
//! Each rebuild produces an immutable `Generation` (platform list + index) that is
//! published with a single atomic pointer swap. Readers never see a partially
//! built index.
//!
//! ## Submodules
//! - **`engine`**: Index construction, publication and lookup.
//! - **`handlers`**: HTTP search handler for the Axum web server.
//! - **`types`**: Platform records, generations and search DTOs.

pub mod engine;
pub mod handlers;
pub mod types;
