pub mod config;
pub mod error;
pub mod logging;
pub mod part_number;
pub mod validation;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::logging::*;
pub use crate::part_number::*;
pub use crate::validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.cors_origin, "http://localhost:3000");
        assert_eq!(config.suppliers.arrow_url, DEFAULT_ARROW_URL);
        assert_eq!(config.suppliers.tti_url, DEFAULT_TTI_URL);
        assert!(config.suppliers.timeout_seconds.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3080");
    }

    #[test]
    fn test_config_load_falls_back_to_defaults() {
        let config = AppConfig::load().unwrap();
        assert!(!config.suppliers.arrow_url.is_empty());
        assert!(!config.suppliers.tti_url.is_empty());
        assert!(!config.logging.level.is_empty());
    }

    #[test]
    fn test_error_handling() {
        let error = BreadboardError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);
    }
}
