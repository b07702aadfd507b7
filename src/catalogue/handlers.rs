use super::loader::load_from_bytes;
use super::types::{CatalogueError, LoadResult};
use crate::index::engine::LocationIndex;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// Form field carrying the catalogue file.
pub const UPLOAD_FIELD: &str = "file";

pub async fn handle_load(
    Extension(index): Extension<Arc<LocationIndex>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Json<LoadResult>) {
    let outcome = match multipart {
        Ok(mut multipart) => match read_upload(&mut multipart).await {
            Ok(bytes) => load_from_bytes(&index, &bytes),
            Err(e) => Err(e),
        },
        Err(rejection) => {
            tracing::debug!("Load request without a multipart body: {}", rejection);
            Err(CatalogueError::Empty)
        }
    };

    match outcome {
        Ok(count) => {
            tracing::info!("Loaded {} platforms from upload", count);
            (StatusCode::OK, Json(LoadResult::loaded(count)))
        }
        Err(e) => {
            tracing::warn!("Failed to load catalogue: {}", e);
            (StatusCode::BAD_REQUEST, Json(LoadResult::failed(&e)))
        }
    }
}

/// Returns the contents of the `file` form field.
///
/// Falls back to the first field that carries a filename. Other form fields are
/// ignored; with neither present the upload counts as empty.
async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, CatalogueError> {
    let mut fallback = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CatalogueError::Upload(e.to_string()))?
    {
        let is_file_field = field.name() == Some(UPLOAD_FIELD);
        if !is_file_field && (fallback.is_some() || field.file_name().is_none()) {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| CatalogueError::Upload(e.to_string()))?;

        if is_file_field {
            return Ok(bytes.to_vec());
        }
        fallback = Some(bytes.to_vec());
    }

    fallback.ok_or(CatalogueError::Empty)
}
