//! Multipart image upload extractor.

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::StatusCode,
};

use common::AppError;
use domain::{ImageSummary, IMAGE_FIELD_NAME};

/// Metadata of the `image` field of a multipart upload.
///
/// The file body is streamed only to count its bytes; nothing is buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

impl From<ImageUpload> for ImageSummary {
    fn from(upload: ImageUpload) -> Self {
        ImageSummary::new(upload.filename, upload.content_type, upload.byte_len)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(IMAGE_FIELD_NAME) {
                continue;
            }

            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);

            let mut byte_len = 0u64;
            while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                byte_len += chunk.len() as u64;
            }

            return Ok(ImageUpload {
                filename,
                content_type,
                byte_len,
            });
        }

        Err(AppError::validation(format!(
            "Multipart field '{}' is required",
            IMAGE_FIELD_NAME
        )))
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    match err.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        status if status.is_server_error() => AppError::internal(err.body_text()),
        _ => AppError::bad_request(err.body_text()),
    }
}
