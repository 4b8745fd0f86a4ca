//! Configuration for the terminal client.
//!
//! One environment-level setting: `TODO_API_URL` selects the todo
//! collection URL, defaulting to the local development backend.

use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/todos";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url =
            env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let config = Self { api_base_url };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
