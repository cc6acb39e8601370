//! Login form and response.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::LOGIN_SUCCESS_MESSAGE;

/// Credentials submitted through the login form
#[derive(Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginForm {
    #[validate(length(min = 1, max = 20, message = "Username must be between 1 and 20 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Miguel06", min_length = 1, max_length = 20))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "hmjscdewfj", format = Password))]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response: the username and a fixed success message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginOut {
    #[cfg_attr(feature = "openapi", schema(example = "Miguel06", max_length = 20))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "Login Succesfuly!"))]
    pub message: String,
}

impl LoginOut {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl From<LoginForm> for LoginOut {
    fn from(form: LoginForm) -> Self {
        LoginOut::new(form.username)
    }
}
