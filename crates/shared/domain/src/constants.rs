//! Domain-level constants.
//!
//! Field bounds live next to the fields as validator attributes; these are the
//! values shared between shaping code, configuration and handlers.

// =============================================================================
// Person directory
// =============================================================================

/// Person ids that the directory knows about when nothing is configured
pub const DEFAULT_KNOWN_PERSON_IDS: &[i64] = &[1, 2, 3, 4, 5];

/// Acknowledgment value returned for a known person id
pub const PERSON_EXISTS_MESSAGE: &str = "It exists";

/// Detail returned when a person id is not in the directory
pub const PERSON_NOT_FOUND_MESSAGE: &str = "¡This person doesn't exist!";

// =============================================================================
// Login
// =============================================================================

/// Fixed message attached to every successful login response
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Succesfuly!";

// =============================================================================
// Uploads
// =============================================================================

/// Bytes per kilobyte used when reporting upload sizes
pub const BYTES_PER_KILOBYTE: f64 = 1000.0;

/// Multipart field name carrying the uploaded image
pub const IMAGE_FIELD_NAME: &str = "image";

// =============================================================================
// Query echo
// =============================================================================

/// Key used in the detail echo when no name was supplied
pub const MISSING_NAME_KEY: &str = "null";
