use crate::error::{BreadboardError, BreadboardResult};
use breadboard_models::PartQuery;
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> BreadboardResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(BreadboardError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, error.code.as_ref()) {
                (Some(message), _) => message.to_string(),
                (None, "length") => format!("Length validation failed for field '{}'", field),
                (None, "required") => format!("Field '{}' is required", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }

    messages.sort();
    messages.join(", ")
}

/// Validate an inbound parts query and return the trimmed part number.
pub fn validate_part_query(query: &PartQuery) -> BreadboardResult<String> {
    validate_model(query)
        .map_err(|error| BreadboardError::validation("partNumber", error.message()))?;

    Ok(query.part_number.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadboard_models::PART_NUMBER_REQUIRED;

    #[test]
    fn test_validate_part_query() {
        assert_eq!(validate_part_query(&PartQuery::new(" 0012345 ")).unwrap(), "0012345");

        let error = validate_part_query(&PartQuery::new("")).unwrap_err();
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.message(), PART_NUMBER_REQUIRED);

        assert!(validate_part_query(&PartQuery::new("\t ")).is_err());
    }

    #[test]
    fn test_validate_part_query_reports_field() {
        let error = validate_part_query(&PartQuery::default()).unwrap_err();
        match &error {
            BreadboardError::Validation { field, message } => {
                assert_eq!(field, "partNumber");
                assert_eq!(message, PART_NUMBER_REQUIRED);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_model_uses_custom_message() {
        let error = validate_model(&PartQuery::default()).unwrap_err();
        assert_eq!(error.message(), PART_NUMBER_REQUIRED);
    }
}
