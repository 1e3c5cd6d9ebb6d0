//! Turning `validator` failures into client-facing messages.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Names of the fields that failed validation, sorted for stable messages.
pub fn failed_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    fields
}

/// Report every missing or empty required field in one validation error.
pub fn missing_fields_error(errors: &ValidationErrors) -> CoreError {
    CoreError::Validation(format!(
        "missing required fields: {}",
        failed_fields(errors).join(", ")
    ))
}

/// Report fields that were supplied but empty.
pub fn empty_fields_error(errors: &ValidationErrors) -> CoreError {
    CoreError::Validation(format!(
        "fields must not be empty: {}",
        failed_fields(errors).join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;

    fn errors_for(fields: &[&'static str]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in fields {
            errors.add(*field, ValidationError::new("required"));
        }
        errors
    }

    #[test]
    fn failed_fields_are_sorted() {
        let errors = errors_for(&["title", "author", "content"]);
        assert_eq!(failed_fields(&errors), vec!["author", "content", "title"]);
    }

    #[test]
    fn missing_fields_message_names_each_field() {
        let err = missing_fields_error(&errors_for(&["title", "dynasty"]));
        match err {
            CoreError::Validation(msg) => {
                assert_eq!(msg, "missing required fields: dynasty, title");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_fields_message_names_each_field() {
        let err = empty_fields_error(&errors_for(&["author"]));
        assert_eq!(
            err.to_string(),
            "Validation failed: fields must not be empty: author"
        );
    }
}
