//! Flattening of `validator` reports into a list of field violations.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// A single broken constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldViolation {
    /// Dotted path to the field, e.g. `person.age`
    pub field: String,
    /// Constraint that failed (`length`, `range`, `email`, `url`, ...)
    pub code: String,
    /// Human readable description
    pub message: String,
}

/// Collect every violation in `errors`, nested records included.
///
/// The result is sorted by field path so reports are stable across runs.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    walk(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

/// Join violation messages into one line.
pub fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn walk(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (name, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| FieldViolation {
                    field: path.clone(),
                    code: e.code.to_string(),
                    message: describe(&path, e),
                }));
            }
            ValidationErrorsKind::Struct(inner) => walk(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    walk(inner, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let min = error.params.get("min");
    let max = error.params.get("max");

    match &*error.code {
        "length" => match (min, max) {
            (Some(min), Some(max)) => {
                format!("{} must be between {} and {} characters", field, min, max)
            }
            (Some(min), None) => format!("{} must be at least {} characters", field, min),
            (None, Some(max)) => format!("{} must be at most {} characters", field, max),
            (None, None) => format!("{} has an invalid length", field),
        },
        "range" => match (min, max) {
            (Some(min), Some(max)) => format!("{} must be between {} and {}", field, min, max),
            (Some(min), None) => format!("{} must be at least {}", field, min),
            (None, Some(max)) => format!("{} must be at most {}", field, max),
            (None, None) => format!("{} is out of range", field),
        },
        "email" => format!("{} must be a valid email address", field),
        "url" => format!("{} must be a valid URL", field),
        _ => format!("{} is invalid", field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(length(max = 3))]
        code: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(range(min = 1, max = 10))]
        count: i32,
        #[validate(email(message = "Invalid email format"))]
        email: String,
        #[validate(nested)]
        inner: Inner,
    }

    fn invalid_outer() -> Outer {
        Outer {
            count: 0,
            email: "nope".to_string(),
            inner: Inner {
                code: "toolong".to_string(),
            },
        }
    }

    #[test]
    fn test_collects_every_violation_sorted_by_path() {
        let errors = invalid_outer().validate().unwrap_err();
        let violations = collect_violations(&errors);

        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["count", "email", "inner.code"]);
    }

    #[test]
    fn test_explicit_message_wins() {
        let errors = invalid_outer().validate().unwrap_err();
        let violations = collect_violations(&errors);

        let email = violations.iter().find(|v| v.field == "email").unwrap();
        assert_eq!(email.code, "email");
        assert_eq!(email.message, "Invalid email format");
    }

    #[test]
    fn test_generated_messages_name_the_field() {
        let errors = invalid_outer().validate().unwrap_err();
        let violations = collect_violations(&errors);

        let count = violations.iter().find(|v| v.field == "count").unwrap();
        assert!(count.message.starts_with("count must be between"));

        let code = violations.iter().find(|v| v.field == "inner.code").unwrap();
        assert_eq!(code.message, "inner.code must be at most 3 characters");
    }

    #[test]
    fn test_summarize_joins_messages() {
        let violations = vec![
            FieldViolation {
                field: "a".to_string(),
                code: "length".to_string(),
                message: "a is too long".to_string(),
            },
            FieldViolation {
                field: "b".to_string(),
                code: "email".to_string(),
                message: "b is not an email".to_string(),
            },
        ];

        assert_eq!(summarize(&violations), "a is too long, b is not an email");
    }
}
