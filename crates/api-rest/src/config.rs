//! API configuration.
//!
//! Loaded in the following order (later sources override earlier ones):
//! 1. Default values
//! 2. `config/api.{toml,yaml,json}` (if it exists)
//! 3. Environment variables prefixed with `API_`, e.g. `API_PORT=3000` or
//!    `API_CORS_ALLOWED_ORIGINS=https://a.example,https://b.example`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host to bind to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// CORS allowed origins (`*` allows any)
    pub cors_allowed_origins: Vec<String>,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Log level
    pub log_level: String,

    /// Emit logs as JSON
    pub json_logging: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
            max_body_size: 1024 * 1024, // 1 MB
            request_timeout_seconds: 30,
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the optional config file and environment variables
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/api").required(false))
            .add_source(
                config::Environment::with_prefix("API")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: ApiConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.max_body_size == 0 {
            anyhow::bail!("Maximum body size must be greater than 0");
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if self.cors_allowed_origins.is_empty() {
            anyhow::bail!("At least one CORS origin is required (use \"*\" to allow any)");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}
