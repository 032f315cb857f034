//! Error types for the auto-reply client
//!
//! Every operation returns these instead of panicking. The operation
//! boundary logs them according to their [`ErrorCategory`].

use thiserror::Error;

/// Main error type for auto-reply operations
#[derive(Error, Debug)]
pub enum AutoReplyError {
    /// The service account key file could not be located
    #[error("Service account key file not found: {path}")]
    CredentialFileMissing { path: String },

    /// The service account key file exists but cannot be used
    #[error("Invalid service account key file {path}: {message}")]
    InvalidCredentialFile { path: String, message: String },

    /// Delegation was rejected or the API refused the token
    #[error("Authorization rejected: {0}")]
    Authorization(String),

    /// Any other failure reported by the Gmail API
    #[error("Gmail API request failed ({status}): {message}")]
    RemoteCall { status: u16, message: String },

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found: {path}")]
    DirNotFound { path: String },

    #[error("Invalid value for {var}: {value}")]
    InvalidEnvVar { var: String, value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Coarse grouping used when an operation reports a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The trust anchor is missing
    FileNotFound,
    /// Authorization or remote API failures
    Http,
    /// Everything else
    Unexpected,
}

impl AutoReplyError {
    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            AutoReplyError::CredentialFileMissing { .. } => ErrorCategory::FileNotFound,
            AutoReplyError::Authorization(_)
            | AutoReplyError::RemoteCall { .. }
            | AutoReplyError::Http(_) => ErrorCategory::Http,
            AutoReplyError::InvalidCredentialFile { .. }
            | AutoReplyError::Validation(_)
            | AutoReplyError::Config(_)
            | AutoReplyError::Io(_)
            | AutoReplyError::Json(_) => ErrorCategory::Unexpected,
        }
    }

    /// Message logged when an operation gives up on this error
    pub fn log_message(&self) -> String {
        match self {
            AutoReplyError::CredentialFileMissing { path } => {
                format!("Service account JSON file not found: {}", path)
            }
            _ if self.category() == ErrorCategory::Http => {
                format!("HTTP error occurred: {}", self)
            }
            _ => format!("An unexpected error occurred: {}", self),
        }
    }
}

/// Result type alias for auto-reply operations
pub type Result<T> = std::result::Result<T, AutoReplyError>;

/// Token requests that fail are treated as a rejected delegation
impl From<yup_oauth2::Error> for AutoReplyError {
    fn from(err: yup_oauth2::Error) -> Self {
        AutoReplyError::Authorization(err.to_string())
    }
}
