use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request to {url} failed after {attempts} attempt(s): {last_failure}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last_failure: String,
    },

    #[error("Unexpected HTTP status {status} from {url}")]
    StatusError { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed {resource} payload: {message}")]
    ShapeError { resource: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Data,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 命令列結束碼；走到這裡的錯誤都代表執行失敗，不會回傳 0
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ContentError {
    pub fn shape(resource: &str, message: impl Into<String>) -> Self {
        Self::ShapeError {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::RetriesExhausted { .. } => ErrorCategory::Network,
            Self::StatusError { .. } => ErrorCategory::Remote,
            Self::SerializationError(_) | Self::ShapeError { .. } => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端失敗會退回靜態內容，對使用者來說只是警告
            ErrorCategory::Network | ErrorCategory::Remote => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the content backend is reachable and try again later"
            }
            ErrorCategory::Remote => {
                "Verify the package id and that the backend serves this resource"
            }
            ErrorCategory::Data => {
                "The backend returned an unexpected payload; check the API version"
            }
            ErrorCategory::Configuration => {
                "Review the configuration file and command line flags"
            }
            ErrorCategory::Io => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Remote => {
                "Live content is currently unavailable".to_string()
            }
            ErrorCategory::Data => "Live content could not be read".to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("File operation failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
