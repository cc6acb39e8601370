//! Contact handler.

use axum::{
    http::{header::USER_AGENT, HeaderMap},
    response::Json,
    routing::post,
    Router,
};
use axum_extra::extract::CookieJar;

use common::AppResult;
use domain::ContactForm;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Cookie carrying the ads preference
const ADS_COOKIE: &str = "ads";

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact))
}

/// Contact
///
/// Accepts a contact message and echoes the caller's user agent.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("user-agent" = Option<String>, Header, description = "Client user agent"),
        ("ads" = Option<String>, Cookie, description = "Ads preference")
    ),
    responses(
        (status = 200, description = "User agent of the caller, or null", body = String),
        (status = 400, description = "Validation error")
    )
)]
pub async fn contact(
    headers: HeaderMap,
    cookies: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> AppResult<Json<Option<String>>> {
    let ads = cookies.get(ADS_COOKIE).map(|cookie| cookie.value().to_string());
    let user_agent = headers.get(USER_AGENT).map(|value| latin1(value.as_bytes()));

    tracing::debug!(
        email = %form.email,
        message_len = form.message.chars().count(),
        ads = ?ads,
        "Contact message received"
    );

    Ok(Json(user_agent))
}

/// Decode header bytes as ISO-8859-1 so opaque (non-ASCII) values are echoed.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
