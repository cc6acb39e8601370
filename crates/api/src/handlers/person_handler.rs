//! Person handlers.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use common::AppResult;
use domain::{
    detail_echo, existence_ack, HairColor, Person, PersonOut, PersonUpdate, UpdatedPerson,
};

use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

/// Query parameters of the person detail lookup
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonDetailQuery {
    /// This is the person name. It's between 1 and 50 characters
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    #[param(example = "Rocio", min_length = 1, max_length = 50)]
    pub name: Option<String>,
    /// This is the person age. It's required
    #[param(example = "21")]
    pub age: String,
}

/// Person identifier captured from the path
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// This is the person ID
    #[validate(range(min = 1, message = "Person ID must be greater than 0"))]
    #[param(example = 3, minimum = 1)]
    pub person_id: i64,
}

/// Create person routes
#[allow(deprecated)]
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/person/new", post(create_person))
        .route("/person/detail", get(show_person))
        .route("/person/detail/:person_id", get(show_person_by_id))
        .route("/person/:person_id", put(update_person))
}

/// Create person in the app
///
/// Returns the person without the password.
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = PersonOut),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> AppResult<(StatusCode, Json<PersonOut>)> {
    tracing::debug!(
        first_name = %person.first_name,
        last_name = %person.last_name,
        hair_color = person.hair_color.map(HairColor::as_str).unwrap_or("unset"),
        "Creating person"
    );

    Ok((StatusCode::CREATED, Json(PersonOut::from(person))))
}

/// Show person from query parameters
///
/// Echoes the name and age as `{name: age}`.
#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "Persons",
    params(PersonDetailQuery),
    responses(
        (status = 200, description = "Name mapped to age"),
        (status = 400, description = "Validation error")
    )
)]
#[deprecated(note = "use /person/detail/{person_id}")]
pub async fn show_person(
    ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>,
) -> AppResult<Json<BTreeMap<String, String>>> {
    Ok(Json(detail_echo(query.name, query.age)))
}

/// Show whether a person exists
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    responses(
        (status = 200, description = "The person exists"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "This person doesn't exist")
    )
)]
pub async fn show_person_by_id(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> AppResult<Json<BTreeMap<String, &'static str>>> {
    state.directory.ensure_exists(path.person_id)?;

    Ok(Json(existence_ack(path.person_id)))
}

/// Update person information
///
/// Echoes the validated person (without password) and location.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    request_body = PersonUpdate,
    responses(
        (status = 201, description = "Person updated", body = UpdatedPerson),
        (status = 400, description = "Validation error")
    )
)]
pub async fn update_person(
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
    ValidatedJson(update): ValidatedJson<PersonUpdate>,
) -> AppResult<(StatusCode, Json<UpdatedPerson>)> {
    tracing::debug!(person_id = path.person_id, "Updating person");

    Ok((StatusCode::CREATED, Json(UpdatedPerson::from(update))))
}
