//! File upload handler.

use axum::{response::Json, routing::post, Router};
use utoipa::ToSchema;

use common::AppResult;
use domain::ImageSummary;

use crate::extractors::ImageUpload;
use crate::state::AppState;

/// Multipart body of the image upload (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    /// Any file: images, documents
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Create file routes
pub fn file_routes() -> Router<AppState> {
    Router::new().route("/post-image", post(post_image))
}

/// Post image
///
/// Returns the filename, format and size in kilobytes of the upload.
#[utoipa::path(
    post,
    path = "/post-image",
    tag = "Files",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload summary", body = ImageSummary),
        (status = 400, description = "Missing or unreadable file"),
        (status = 413, description = "File exceeds the upload limit")
    )
)]
pub async fn post_image(upload: ImageUpload) -> AppResult<Json<ImageSummary>> {
    tracing::debug!(
        filename = ?upload.filename,
        content_type = ?upload.content_type,
        bytes = upload.byte_len,
        "Image received"
    );

    Ok(Json(ImageSummary::from(upload)))
}
