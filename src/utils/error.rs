use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Remote request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate taxonomy term: {term}")]
    DuplicateTermError { term: String },

    #[error("Remote classifier rejected the request: {message}")]
    RemoteRejectedError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TagError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TagError::ApiError(_) | TagError::RemoteRejectedError { .. } => ErrorCategory::Network,
            TagError::IoError(_) => ErrorCategory::System,
            TagError::SerializationError(_) | TagError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            TagError::ConfigError { .. }
            | TagError::ConfigValidationError { .. }
            | TagError::InvalidConfigValueError { .. }
            | TagError::MissingConfigError { .. }
            | TagError::DuplicateTermError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端失敗時仍可用本地分類器
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TagError::ApiError(_) => "Check that the remote classifier endpoint is reachable",
            TagError::RemoteRejectedError { .. } => {
                "Inspect the remote classifier logs; local classification is used meanwhile"
            }
            TagError::IoError(_) => "Check that the file exists and is readable",
            TagError::SerializationError(_) => "Make sure the request body is valid JSON",
            TagError::DuplicateTermError { .. } => "Remove the repeated [[keywords]] entry",
            TagError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML"
            }
            TagError::ConfigError { .. }
            | TagError::InvalidConfigValueError { .. }
            | TagError::MissingConfigError { .. } => {
                "Review the classifier configuration values"
            }
            TagError::ValidationError { .. } => "Review the input data",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid classifier configuration: {}", self),
            ErrorCategory::Network => format!("Remote tag service unavailable: {}", self),
            ErrorCategory::Data => format!("Could not read the request: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
