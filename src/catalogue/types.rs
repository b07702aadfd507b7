//! Catalogue Data Types
//!
//! Load responses returned to HTTP clients and the errors that can abort a load
//! before the index is touched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a catalogue could not be loaded.
///
/// Any of these short-circuits the load: the index keeps its current generation.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("File is empty or not provided")]
    Empty,

    #[error("Error loading platforms: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error loading platforms: catalogue is not valid UTF-8 ({0})")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Error loading platforms: {0}")]
    Upload(String),
}

/// Response body for the catalogue upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    pub success: bool,
    pub message: String,
    pub loaded_platforms_count: usize,
}

impl LoadResult {
    pub fn loaded(count: usize) -> Self {
        Self {
            success: true,
            message: "Platforms loaded successfully".to_string(),
            loaded_platforms_count: count,
        }
    }

    pub fn failed(err: &CatalogueError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            loaded_platforms_count: 0,
        }
    }
}
