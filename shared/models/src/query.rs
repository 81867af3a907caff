//! Inbound query DTOs.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

pub const PART_NUMBER_REQUIRED: &str = "Part Number is required";

/// Query string of `GET /v1/parts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartQuery {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub part_number: String,
}

impl PartQuery {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(PART_NUMBER_REQUIRED));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_query_validation() {
        assert!(PartQuery::new("BAV99").validate().is_ok());
        assert!(PartQuery::new("").validate().is_err());
        assert!(PartQuery::new("   ").validate().is_err());
    }

    #[test]
    fn test_missing_part_number_deserializes_empty() {
        let query: PartQuery = serde_json::from_str("{}").unwrap();
        assert!(query.part_number.is_empty());

        let query: PartQuery = serde_json::from_str(r#"{"partNumber": "0012345"}"#).unwrap();
        assert_eq!(query.part_number, "0012345");
    }
}
