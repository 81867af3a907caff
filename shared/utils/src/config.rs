use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::BreadboardResult;

pub const DEFAULT_ARROW_URL: &str = "https://backend-takehome.s3.us-east-1.amazonaws.com/myarrow.json";
pub const DEFAULT_TTI_URL: &str = "https://backend-takehome.s3.us-east-1.amazonaws.com/tti.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub suppliers: SuppliersConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Front-end origin allowed by CORS.
    pub cors_origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppliersConfig {
    pub arrow_url: String,
    pub tti_url: String,
    /// Per-request timeout. Unset leaves the transport default (none).
    pub timeout_seconds: Option<u64>,
    pub pool_idle_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> BreadboardResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = AppConfig::default();

        let config = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.cors_origin", defaults.server.cors_origin)?
            .set_default("suppliers.arrow_url", defaults.suppliers.arrow_url)?
            .set_default("suppliers.tti_url", defaults.suppliers.tti_url)?
            .set_default(
                "suppliers.pool_idle_timeout_seconds",
                defaults.suppliers.pool_idle_timeout_seconds as i64,
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with BREADBOARD prefix
            .add_source(Environment::with_prefix("BREADBOARD").separator("__"));

        Ok(config.build()?.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3080,
                cors_origin: "http://localhost:3000".to_string(),
            },
            suppliers: SuppliersConfig {
                arrow_url: DEFAULT_ARROW_URL.to_string(),
                tti_url: DEFAULT_TTI_URL.to_string(),
                timeout_seconds: None,
                pool_idle_timeout_seconds: 90,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                file_path: None,
            },
        }
    }
}
