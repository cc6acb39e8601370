//! Uploaded file metadata.

use serde::{Deserialize, Serialize};

use crate::constants::BYTES_PER_KILOBYTE;

/// Summary of an uploaded image.
///
/// Only metadata is kept; the file contents are never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImageSummary {
    #[serde(rename = "Filename")]
    #[cfg_attr(feature = "openapi", schema(example = "photo.png"))]
    pub filename: Option<String>,
    #[serde(rename = "Format")]
    #[cfg_attr(feature = "openapi", schema(example = "image/png"))]
    pub content_type: Option<String>,
    #[serde(rename = "Size(kB)")]
    #[cfg_attr(feature = "openapi", schema(example = 2.0))]
    pub size_kb: f64,
}

impl ImageSummary {
    pub fn new(filename: Option<String>, content_type: Option<String>, byte_len: u64) -> Self {
        Self {
            filename,
            content_type,
            size_kb: kilobytes(byte_len),
        }
    }
}

/// Size in kilobytes rounded to one decimal place.
///
/// Rounds the exact binary value with ties to even, so `1.25` becomes `1.2`
/// while `1.35` (stored as `1.3500000000000000888`) becomes `1.4`.
pub fn kilobytes(byte_len: u64) -> f64 {
    let kb = byte_len as f64 / BYTES_PER_KILOBYTE;
    format!("{:.1}", kb).parse().unwrap_or(kb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilobytes_rounds_to_one_decimal() {
        assert_eq!(kilobytes(2048), 2.0);
        assert_eq!(kilobytes(0), 0.0);
        assert_eq!(kilobytes(999), 1.0);
        assert_eq!(kilobytes(12_345), 12.3);
    }

    #[test]
    fn test_kilobytes_ties_round_to_even() {
        assert_eq!(kilobytes(1250), 1.2);
        assert_eq!(kilobytes(150), 0.1);
        assert_eq!(kilobytes(3250), 3.2);
        assert_eq!(kilobytes(1350), 1.4);
        assert_eq!(kilobytes(2750), 2.8);
    }

    #[test]
    fn test_summary_uses_display_keys() {
        let summary = ImageSummary::new(
            Some("photo.png".to_string()),
            Some("image/png".to_string()),
            2048,
        );
        let value = serde_json::to_value(summary).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "Filename": "photo.png", "Format": "image/png", "Size(kB)": 2.0 })
        );
    }
}
