//! Contact form.

use serde::Deserialize;
use validator::Validate;

/// Message sent through the contact form
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactForm {
    #[validate(length(min = 1, max = 20, message = "First name must be between 1 and 20 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Facundo", min_length = 1, max_length = 20))]
    pub first_name: String,
    #[validate(length(min = 1, max = 20, message = "Last name must be between 1 and 20 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Garcia", min_length = 1, max_length = 20))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[cfg_attr(feature = "openapi", schema(example = "correo@gmail.com"))]
    pub email: String,
    #[validate(length(min = 20, message = "Message must be at least 20 characters"))]
    #[cfg_attr(
        feature = "openapi",
        schema(example = "I would like to know more about the app", min_length = 20)
    )]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            first_name: "Facundo".to_string(),
            last_name: "Garcia".to_string(),
            email: "correo@gmail.com".to_string(),
            message: "x".repeat(20),
        }
    }

    #[test]
    fn test_valid_contact_form() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_message_minimum_length() {
        let mut short = form();
        short.message = "x".repeat(19);
        let errors = short.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn test_name_bounds() {
        let mut contact = form();
        contact.first_name = String::new();
        contact.last_name = "y".repeat(21);
        let errors = contact.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("last_name"));

        contact.first_name = "x".repeat(20);
        contact.last_name = "y".repeat(20);
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_email_format() {
        let mut contact = form();
        contact.email = "not-an-email".to_string();
        assert!(contact.validate().is_err());
    }
}
