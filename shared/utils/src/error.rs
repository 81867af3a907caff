use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum BreadboardError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Decode error: {source_name} - {message}")]
    Decode { source_name: String, message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl BreadboardError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn decode(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Configuration { .. } => 500,
            Self::ExternalService { .. } => 502,
            Self::Decode { .. } => 502,
            Self::Internal { .. } => 500,
        }
    }

    /// Human-facing message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Configuration { message }
            | Self::ExternalService { message, .. }
            | Self::Decode { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

pub type BreadboardResult<T> = Result<T, BreadboardError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<BreadboardError> for ErrorResponse {
    fn from(error: BreadboardError) -> Self {
        let details = match &error {
            BreadboardError::Validation { field, .. } => Some(serde_json::json!({ "field": field })),
            BreadboardError::ExternalService { service, .. } => {
                Some(serde_json::json!({ "service": service }))
            }
            _ => None,
        };

        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

impl IntoResponse for BreadboardError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

// Conversion from common error types
impl From<reqwest::Error> for BreadboardError {
    fn from(error: reqwest::Error) -> Self {
        let service = error
            .url()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "HTTP Client".to_string());
        Self::external_service(service, error.to_string())
    }
}

impl From<::config::ConfigError> for BreadboardError {
    fn from(error: ::config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_body() {
        let error = BreadboardError::validation("partNumber", "Part Number is required");
        let body = ErrorResponse::from(error);

        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.message, "Part Number is required");
        assert_eq!(body.details, Some(serde_json::json!({"field": "partNumber"})));
    }

    #[test]
    fn test_into_response_status() {
        let response = BreadboardError::external_service("suppliers", "all failed").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = BreadboardError::validation("partNumber", "missing").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_error_maps_to_configuration() {
        let error: BreadboardError = ::config::ConfigError::Message("bad port".to_string()).into();
        assert_eq!(error.error_code(), "CONFIGURATION_ERROR");
        assert_eq!(error.http_status_code(), 500);
        assert!(error.message().contains("bad port"));
    }

    #[test]
    fn test_internal_error_response() {
        let response = BreadboardError::internal("encoder failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
