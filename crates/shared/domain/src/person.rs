//! Person records and their public projections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MISSING_NAME_KEY, PERSON_EXISTS_MESSAGE};

/// Allowed hair colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    /// Every accepted value, in declaration order
    pub const ALL: [HairColor; 5] = [
        HairColor::White,
        HairColor::Brown,
        HairColor::Black,
        HairColor::Blonde,
        HairColor::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HairColor::White => "white",
            HairColor::Brown => "brown",
            HairColor::Black => "black",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
        }
    }
}

/// Where a person lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Location {
    #[validate(length(max = 50, message = "City must be at most 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "New York City", max_length = 50))]
    pub city: String,
    #[validate(length(max = 50, message = "State must be at most 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "New York", max_length = 50))]
    pub state: String,
    #[validate(length(max = 50, message = "Country must be at most 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "EEUU", max_length = 50))]
    pub country: String,
}

/// Person as submitted by clients (create and update input).
///
/// Only deserializable: the password cannot leave the process through this
/// type. Convert to [`PersonOut`] before responding.
#[derive(Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Person {
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Facundo", min_length = 1, max_length = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Garcia", min_length = 1, max_length = 50))]
    pub last_name: String,
    #[validate(range(min = 1, max = 115, message = "Age must be between 1 and 115"))]
    #[cfg_attr(feature = "openapi", schema(example = 21, minimum = 1, maximum = 115))]
    pub age: i32,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "black"))]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = false))]
    pub is_married: Option<bool>,
    #[validate(email(message = "Invalid email format"))]
    #[cfg_attr(feature = "openapi", schema(example = "correo@gmail.com"))]
    pub email: String,
    #[validate(url(message = "Invalid URL"))]
    #[cfg_attr(feature = "openapi", schema(example = "http://socialred.com/user"))]
    pub social_link: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "hmjscdewfj", min_length = 8, format = Password))]
    pub password: String,
}

impl std::fmt::Debug for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Person")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("age", &self.age)
            .field("hair_color", &self.hair_color)
            .field("is_married", &self.is_married)
            .field("email", &self.email)
            .field("social_link", &self.social_link)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Public person profile (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonOut {
    #[cfg_attr(feature = "openapi", schema(example = "Facundo"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Garcia"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 21))]
    pub age: i32,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
    #[cfg_attr(feature = "openapi", schema(example = "correo@gmail.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "http://socialred.com/user"))]
    pub social_link: String,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            last_name: person.last_name,
            age: person.age,
            hair_color: person.hair_color,
            is_married: person.is_married,
            email: person.email,
            social_link: person.social_link,
        }
    }
}

/// Update payload: the person and their location, embedded by name
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonUpdate {
    #[validate(nested)]
    pub person: Person,
    #[validate(nested)]
    pub location: Location,
}

/// Echo of an accepted update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatedPerson {
    pub person: PersonOut,
    pub location: Location,
}

impl From<PersonUpdate> for UpdatedPerson {
    fn from(update: PersonUpdate) -> Self {
        Self {
            person: PersonOut::from(update.person),
            location: update.location,
        }
    }
}

/// Single entry map `{name: age}`; a missing name is keyed as `"null"`.
pub fn detail_echo(name: Option<String>, age: String) -> BTreeMap<String, String> {
    let key = name.unwrap_or_else(|| MISSING_NAME_KEY.to_string());
    BTreeMap::from([(key, age)])
}

/// Acknowledgment `{"<id>": "It exists"}` for a known person.
pub fn existence_ack(id: i64) -> BTreeMap<String, &'static str> {
    BTreeMap::from([(id.to_string(), PERSON_EXISTS_MESSAGE)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_json() -> serde_json::Value {
        json!({
            "first_name": "Facundo",
            "last_name": "Garcia",
            "age": 21,
            "hair_color": "black",
            "is_married": false,
            "email": "correo@gmail.com",
            "social_link": "http://socialred.com/user",
            "password": "hmjscdewfj"
        })
    }

    fn person_with(field: &str, value: serde_json::Value) -> Person {
        let mut body = valid_json();
        body[field] = value;
        serde_json::from_value(body).unwrap()
    }

    fn failed_fields(person: &Person) -> Vec<String> {
        match person.validate() {
            Ok(()) => vec![],
            Err(e) => {
                let mut fields: Vec<_> = e.field_errors().keys().map(|k| k.to_string()).collect();
                fields.sort();
                fields
            }
        }
    }

    #[test]
    fn test_valid_person_passes() {
        let person: Person = serde_json::from_value(valid_json()).unwrap();
        assert!(person.validate().is_ok());
    }

    #[test]
    fn test_first_name_length_boundaries() {
        assert_eq!(failed_fields(&person_with("first_name", json!(""))), vec!["first_name"]);
        assert!(failed_fields(&person_with("first_name", json!("a"))).is_empty());
        assert!(failed_fields(&person_with("first_name", json!("a".repeat(50)))).is_empty());
        assert_eq!(
            failed_fields(&person_with("first_name", json!("a".repeat(51)))),
            vec!["first_name"]
        );
    }

    #[test]
    fn test_last_name_counts_characters_not_bytes() {
        // 50 two-byte characters
        assert!(failed_fields(&person_with("last_name", json!("ñ".repeat(50)))).is_empty());
        assert_eq!(
            failed_fields(&person_with("last_name", json!("ñ".repeat(51)))),
            vec!["last_name"]
        );
    }

    #[test]
    fn test_age_boundaries() {
        assert_eq!(failed_fields(&person_with("age", json!(0))), vec!["age"]);
        assert!(failed_fields(&person_with("age", json!(1))).is_empty());
        assert!(failed_fields(&person_with("age", json!(115))).is_empty());
        assert_eq!(failed_fields(&person_with("age", json!(116))), vec!["age"]);
        assert_eq!(failed_fields(&person_with("age", json!(-4))), vec!["age"]);
    }

    #[test]
    fn test_password_minimum_length() {
        assert_eq!(failed_fields(&person_with("password", json!("1234567"))), vec!["password"]);
        assert!(failed_fields(&person_with("password", json!("12345678"))).is_empty());
    }

    #[test]
    fn test_email_format() {
        assert_eq!(failed_fields(&person_with("email", json!("not-an-email"))), vec!["email"]);
        assert!(failed_fields(&person_with("email", json!("a@b.com"))).is_empty());
    }

    #[test]
    fn test_social_link_requires_absolute_url() {
        assert_eq!(
            failed_fields(&person_with("social_link", json!("socialred.com/user"))),
            vec!["social_link"]
        );
        assert!(failed_fields(&person_with("social_link", json!("https://socialred.com"))).is_empty());
    }

    #[test]
    fn test_hair_color_accepts_listed_values() {
        for color in HairColor::ALL {
            let person = person_with("hair_color", json!(color.as_str()));
            assert_eq!(person.hair_color, Some(color));
        }
    }

    #[test]
    fn test_hair_color_rejects_unlisted_value() {
        let mut body = valid_json();
        body["hair_color"] = json!("green");
        assert!(serde_json::from_value::<Person>(body).is_err());
    }

    #[test]
    fn test_hair_color_absent_or_null_is_unset() {
        let mut body = valid_json();
        body.as_object_mut().unwrap().remove("hair_color");
        body.as_object_mut().unwrap().remove("is_married");
        let person: Person = serde_json::from_value(body).unwrap();
        assert_eq!(person.hair_color, None);
        assert_eq!(person.is_married, None);

        let person = person_with("hair_color", json!(null));
        assert_eq!(person.hair_color, None);
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let mut body = valid_json();
        body["first_name"] = json!("");
        body["age"] = json!(200);
        body["email"] = json!("nope");
        let person: Person = serde_json::from_value(body).unwrap();

        assert_eq!(failed_fields(&person), vec!["age", "email", "first_name"]);
    }

    #[test]
    fn test_person_out_drops_password() {
        let person: Person = serde_json::from_value(valid_json()).unwrap();
        let out = serde_json::to_value(PersonOut::from(person)).unwrap();

        assert!(out.get("password").is_none());
        assert_eq!(out["first_name"], "Facundo");
        assert_eq!(out["hair_color"], "black");
    }

    #[test]
    fn test_debug_redacts_password() {
        let person: Person = serde_json::from_value(valid_json()).unwrap();
        let debug = format!("{:?}", person);

        assert!(!debug.contains("hmjscdewfj"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_location_length_limit() {
        let location = Location {
            city: "a".repeat(50),
            state: "b".repeat(51),
            country: String::new(),
        };
        let errors = location.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("state"));
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_update_validates_both_records() {
        let mut person = valid_json();
        person["age"] = json!(0);
        let update: PersonUpdate = serde_json::from_value(json!({
            "person": person,
            "location": { "city": "c", "state": "s", "country": "x".repeat(60) }
        }))
        .unwrap();

        let violations = crate::validation::collect_violations(&update.validate().unwrap_err());
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["location.country", "person.age"]);
    }

    #[test]
    fn test_updated_person_hides_password() {
        let update: PersonUpdate = serde_json::from_value(json!({
            "person": valid_json(),
            "location": { "city": "New York City", "state": "New York", "country": "EEUU" }
        }))
        .unwrap();

        let echoed = serde_json::to_value(UpdatedPerson::from(update)).unwrap();
        assert!(echoed["person"].get("password").is_none());
        assert_eq!(echoed["location"]["country"], "EEUU");
    }

    #[test]
    fn test_detail_echo_keys_by_name() {
        let echo = detail_echo(Some("Rocio".to_string()), "21".to_string());
        assert_eq!(echo.get("Rocio").map(String::as_str), Some("21"));

        let echo = detail_echo(None, "21".to_string());
        assert_eq!(echo.get("null").map(String::as_str), Some("21"));
    }

    #[test]
    fn test_existence_ack_shape() {
        let ack = serde_json::to_value(existence_ack(3)).unwrap();
        assert_eq!(ack, json!({ "3": "It exists" }));
    }
}
