use super::engine::LocationIndex;
use super::types::SearchResult;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub location: Option<String>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<Arc<LocationIndex>>,
) -> Json<SearchResult> {
    let location = params.location.unwrap_or_default();
    Json(index.query(&location))
}
