use crate::utils::error::{ContentError, Result};
use std::str::FromStr;

pub const PRODUCTION_BASE_URL: &str = "https://backend-visitbolivia.onrender.com";
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

/// 部署環境的環境變數名稱
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Reads `APP_ENV` once; unset or unknown values mean development.
    pub fn from_env() -> Self {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Unknown {} value '{}', using development endpoint",
                    ENVIRONMENT_VAR,
                    value
                );
                Environment::Development
            }),
            Err(_) => Environment::Development,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Development => DEVELOPMENT_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "local" => Ok(Environment::Development),
            other => Err(ContentError::InvalidConfigValueError {
                field: "environment".to_string(),
                value: other.to_string(),
                reason: "Expected 'production' or 'development'".to_string(),
            }),
        }
    }
}
