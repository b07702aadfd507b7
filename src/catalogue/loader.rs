use super::parser::parse_catalogue;
use super::types::CatalogueError;
use crate::index::engine::LocationIndex;
use std::path::Path;

/// Parses `text` and replaces the index contents with the result.
///
/// Empty input is rejected before the index is touched. Input that is non-empty
/// but contains no well-formed line still rebuilds, to an empty generation.
pub fn load_from_text(index: &LocationIndex, text: &str) -> Result<usize, CatalogueError> {
    if text.is_empty() {
        return Err(CatalogueError::Empty);
    }

    let platforms = parse_catalogue(text);
    tracing::debug!("Parsed {} platform records", platforms.len());

    Ok(index.rebuild(platforms))
}

pub fn load_from_bytes(index: &LocationIndex, bytes: &[u8]) -> Result<usize, CatalogueError> {
    if bytes.is_empty() {
        return Err(CatalogueError::Empty);
    }

    let text = std::str::from_utf8(bytes)?;
    load_from_text(index, text)
}

pub async fn load_from_file(index: &LocationIndex, path: &Path) -> Result<usize, CatalogueError> {
    let bytes = tokio::fs::read(path).await?;
    load_from_bytes(index, &bytes)
}
