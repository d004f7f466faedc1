pub mod environment;
pub mod toml_config;

use crate::domain::model::{Locale, RetryPolicy, DEFAULT_PACKAGE_ID};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use environment::Environment;

/// 啟動時解析完成的設定，之後明確傳入客戶端
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub package_id: String,
    pub locale: Locale,
    pub retry: RetryPolicy,
    pub fallback_on_empty: bool,
}

impl Settings {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            package_id: DEFAULT_PACKAGE_ID.to_string(),
            locale: Locale::default(),
            retry: RetryPolicy::default(),
            fallback_on_empty: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_environment(Environment::from_env())
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.base_url
    }

    fn package_id(&self) -> &str {
        &self.package_id
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    fn fallback_on_empty(&self) -> bool {
        self.fallback_on_empty
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("package_id", &self.package_id)?;
        validation::validate_range("max_retries", self.retry.max_retries, 1, 10)?;
        validation::validate_positive_number(
            "timeout_seconds",
            self.retry.request_timeout.as_secs(),
            1,
        )?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ResourceSelection};

#[cfg(feature = "cli")]
pub mod cli {
    use super::toml_config::TomlConfig;
    use super::Settings;
    use crate::config::environment::Environment;
    use crate::domain::model::Locale;
    use crate::utils::error::{ContentError, Result};
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::str::FromStr;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ResourceSelection {
        All,
        Reviews,
        Images,
        Itinerary,
    }

    impl FromStr for ResourceSelection {
        type Err = ContentError;

        fn from_str(s: &str) -> Result<Self> {
            match s.to_ascii_lowercase().as_str() {
                "all" => Ok(ResourceSelection::All),
                "reviews" => Ok(ResourceSelection::Reviews),
                "images" => Ok(ResourceSelection::Images),
                "itinerary" => Ok(ResourceSelection::Itinerary),
                other => Err(ContentError::InvalidConfigValueError {
                    field: "resource".to_string(),
                    value: other.to_string(),
                    reason: "Expected one of: all, reviews, images, itinerary".to_string(),
                }),
            }
        }
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "trip-content")]
    #[command(about = "Fetch live trip content with retry and static fallback")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Backend base URL (overrides --environment and APP_ENV)
        #[arg(long)]
        pub base_url: Option<String>,

        /// production or development
        #[arg(long)]
        pub environment: Option<Environment>,

        #[arg(long)]
        pub package_id: Option<String>,

        /// en or es
        #[arg(long)]
        pub locale: Option<Locale>,

        /// all, reviews, images or itinerary
        #[arg(long, default_value = "all")]
        pub resource: ResourceSelection,

        #[arg(long)]
        pub max_retries: Option<u32>,

        #[arg(long)]
        pub initial_delay_ms: Option<u64>,

        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        /// Treat an empty live result like a failure
        #[arg(long)]
        pub fallback_on_empty: bool,

        /// Write the JSON result to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        /// Emit logs as JSON
        #[arg(long)]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 合併設定：命令列 > TOML 檔案 > 環境預設值
        pub fn to_settings(&self) -> Result<Settings> {
            let mut settings = match &self.config {
                Some(path) => {
                    let toml_config = TomlConfig::from_file(path)?;
                    toml_config.validate()?;
                    toml_config.into_settings()?
                }
                None => Settings::for_environment(
                    self.environment.unwrap_or_else(Environment::from_env),
                ),
            };

            if let Some(environment) = self.environment {
                settings.base_url = environment.base_url().to_string();
            }
            if let Some(base_url) = &self.base_url {
                settings.base_url = base_url.clone();
            }
            if let Some(package_id) = &self.package_id {
                settings.package_id = package_id.clone();
            }
            if let Some(locale) = self.locale {
                settings.locale = locale;
            }
            if let Some(max_retries) = self.max_retries {
                settings.retry.max_retries = max_retries;
            }
            if let Some(delay) = self.initial_delay_ms {
                settings.retry.initial_delay = Duration::from_millis(delay);
            }
            if let Some(timeout) = self.timeout_seconds {
                settings.retry.request_timeout = Duration::from_secs(timeout);
            }
            if self.fallback_on_empty {
                settings.fallback_on_empty = true;
            }

            settings.validate()?;
            Ok(settings)
        }
    }

}
