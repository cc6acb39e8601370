//! Domain layer - Person records, validation rules and response shapes.
//!
//! This crate contains pure domain logic with no HTTP dependencies.
//! Every record validates itself through `validator::Validate`; shaping
//! into public responses happens through `From` conversions.

pub mod constants;
pub mod contact;
pub mod directory;
pub mod error;
pub mod login;
pub mod person;
pub mod upload;
pub mod validation;

pub use constants::*;
pub use contact::ContactForm;
pub use directory::{FixedPersonDirectory, PersonDirectory};
pub use error::{DomainError, DomainResult};
pub use login::{LoginForm, LoginOut};
pub use person::{
    detail_echo, existence_ack, HairColor, Location, Person, PersonOut, PersonUpdate,
    UpdatedPerson,
};
pub use upload::{kilobytes, ImageSummary};
pub use validation::{collect_violations, FieldViolation};
