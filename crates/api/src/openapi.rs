//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::file_handler::ImageUploadForm;
use crate::handlers::home_handler::{Greeting, HealthResponse};
use domain::{
    ContactForm, FieldViolation, HairColor, ImageSummary, Location, LoginForm, LoginOut, Person,
    PersonOut, PersonUpdate, UpdatedPerson,
};

/// API documentation struct.
#[allow(deprecated)]
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person API",
        description = "Validation-only person endpoints: create, query, update, login, contact and upload"
    ),
    paths(
        crate::handlers::home_handler::home,
        crate::handlers::home_handler::health,
        crate::handlers::person_handler::create_person,
        crate::handlers::person_handler::show_person,
        crate::handlers::person_handler::show_person_by_id,
        crate::handlers::person_handler::update_person,
        crate::handlers::auth_handler::login,
        crate::handlers::contact_handler::contact,
        crate::handlers::file_handler::post_image,
    ),
    components(
        schemas(
            Greeting,
            HealthResponse,
            HairColor,
            Location,
            Person,
            PersonOut,
            PersonUpdate,
            UpdatedPerson,
            LoginForm,
            LoginOut,
            ContactForm,
            ImageSummary,
            ImageUploadForm,
            FieldViolation,
        )
    ),
    tags(
        (name = "Home", description = "Greeting and liveness"),
        (name = "Persons", description = "Person endpoints"),
        (name = "Contact", description = "Contact form"),
        (name = "Files", description = "File uploads"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/person/new", "/person/detail", "/person/detail/{person_id}", "/login"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_query_lookup_is_deprecated() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["paths"]["/person/detail"]["get"]["deprecated"], true);
    }
}
