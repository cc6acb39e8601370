//! Request extractors that validate their payload before the handler runs.

mod image_upload;
mod validated_form;
mod validated_json;
mod validated_path;
mod validated_query;

pub use image_upload::ImageUpload;
pub use validated_form::ValidatedForm;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;

use common::AppResult;
use domain::DomainError;
use validator::Validate;

/// Run declared constraints, reporting every failing field at once.
fn validate<T: Validate>(value: T) -> AppResult<T> {
    value.validate().map_err(DomainError::from)?;
    Ok(value)
}
