use crate::config::environment::Environment;
use crate::config::Settings;
use crate::domain::model::{Locale, RetryPolicy, DEFAULT_PACKAGE_ID};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub environment: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: Option<u32>,
    pub initial_delay_ms: Option<u64>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    pub package_id: Option<String>,
    pub locale: Option<String>,
    pub fallback_on_empty: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContentError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 決定 API 位址：明確設定的 base_url 優先，其次是 environment，最後是 APP_ENV
    pub fn resolve_base_url(&self) -> Result<String> {
        if let Some(base_url) = &self.api.base_url {
            return Ok(base_url.clone());
        }

        let environment = match &self.api.environment {
            Some(name) => name.parse::<Environment>()?,
            None => Environment::from_env(),
        };
        Ok(environment.base_url().to_string())
    }

    pub fn locale(&self) -> Result<Locale> {
        self.content
            .locale
            .as_deref()
            .map(str::parse)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let defaults = RetryPolicy::default();
        RetryPolicy {
            max_retries: self.retry.max_retries.unwrap_or(defaults.max_retries),
            initial_delay: self
                .retry
                .initial_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.initial_delay),
            request_timeout: self
                .retry
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }

    pub fn into_settings(self) -> Result<Settings> {
        let settings = Settings {
            base_url: self.resolve_base_url()?,
            package_id: self
                .content
                .package_id
                .clone()
                .unwrap_or_else(|| DEFAULT_PACKAGE_ID.to_string()),
            locale: self.locale()?,
            retry: self.retry_policy(),
            fallback_on_empty: self.content.fallback_on_empty.unwrap_or(false),
        };
        Ok(settings)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            crate::utils::validation::validate_url("api.base_url", base_url)?;
        }

        if let Some(package_id) = &self.content.package_id {
            crate::utils::validation::validate_non_empty_string("content.package_id", package_id)?;
        }

        if let Some(max_retries) = self.retry.max_retries {
            crate::utils::validation::validate_range("retry.max_retries", max_retries, 1, 10)?;
        }

        if let Some(timeout) = self.retry.timeout_seconds {
            crate::utils::validation::validate_positive_number("retry.timeout_seconds", timeout, 1)?;
        }

        self.locale()?;
        Ok(())
    }
}
