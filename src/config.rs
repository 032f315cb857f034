//! Configuration management for the auto-reply client
//!
//! Handles the service account key path, scopes, and the behavior knobs
//! of the set operation. Everything is injectable so tests can substitute
//! fakes and local endpoints.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AutoReplyError, ConfigError, Result};

/// Default pause between disabling and re-enabling the auto-reply
pub const DEFAULT_PROPAGATION_DELAY: Duration = Duration::from_secs(3);

/// Configuration for the auto-reply client
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service account key file (the trust anchor)
    pub credentials_path: PathBuf,

    /// OAuth scopes requested for the delegated token
    pub scopes: Vec<String>,

    /// Pause after the disable call, before the new settings are written
    pub propagation_delay: Duration,

    /// Only reply to senders in the user's contacts
    pub restrict_to_contacts: bool,

    /// Only reply to senders in the user's domain
    pub restrict_to_domain: bool,

    /// Base URL for Gmail API
    pub api_base_url: String,
}

impl Config {
    /// Create a new configuration from defaults and environment overrides
    pub fn new() -> Result<Self> {
        Self::with_overrides(None, None)
    }

    /// Like [`Config::new`], but explicit values win over the environment
    ///
    /// An overridden setting never consults its environment variable or the
    /// home directory, so a bad value there cannot fail the load.
    pub fn with_overrides(
        credentials_path: Option<PathBuf>,
        propagation_delay: Option<Duration>,
    ) -> Result<Self> {
        let credentials_path = match credentials_path {
            Some(path) => path,
            None => match std::env::var("GMAIL_SERVICE_ACCOUNT_PATH") {
                Ok(path) => PathBuf::from(path),
                Err(_) => Self::get_config_dir()?.join("service_account.json"),
            },
        };

        let propagation_delay = match propagation_delay {
            Some(delay) => delay,
            None => Self::delay_from_env()?,
        };

        let api_base_url = std::env::var("GMAIL_API_BASE_URL")
            .unwrap_or_else(|_| gmail::API_BASE_URL.to_string());

        let config = Self {
            credentials_path,
            propagation_delay,
            api_base_url,
            ..Self::with_credentials_path(PathBuf::new())
        };
        config.validate()?;
        Ok(config)
    }

    fn delay_from_env() -> Result<Duration> {
        let Ok(value) = std::env::var("GMAIL_AUTO_REPLY_DELAY_SECS") else {
            return Ok(DEFAULT_PROPAGATION_DELAY);
        };
        let secs: u64 = value.parse().map_err(|_| {
            AutoReplyError::Config(ConfigError::InvalidEnvVar {
                var: "GMAIL_AUTO_REPLY_DELAY_SECS".to_string(),
                value: value.clone(),
            })
        })?;
        Ok(Duration::from_secs(secs))
    }

    /// Configuration with default settings and an explicit key file
    pub fn with_credentials_path(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            scopes: vec![gmail::SETTINGS_BASIC_SCOPE.to_string()],
            propagation_delay: DEFAULT_PROPAGATION_DELAY,
            restrict_to_contacts: false,
            restrict_to_domain: false,
            api_base_url: gmail::API_BASE_URL.to_string(),
        }
    }

    /// Override the post-disable delay
    pub fn propagation_delay(mut self, delay: Duration) -> Self {
        self.propagation_delay = delay;
        self
    }

    /// Override the Gmail API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Check invariants the operations rely on
    pub fn validate(&self) -> Result<()> {
        if self.propagation_delay.is_zero() {
            return Err(AutoReplyError::Config(ConfigError::InvalidConfig {
                message: "propagation delay must be greater than zero".to_string(),
            }));
        }
        if self.scopes.is_empty() {
            return Err(AutoReplyError::Config(ConfigError::InvalidConfig {
                message: "at least one OAuth scope is required".to_string(),
            }));
        }
        Ok(())
    }

    /// Directory holding the default key file
    fn get_config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            AutoReplyError::Config(ConfigError::DirNotFound {
                path: "~".to_string(),
            })
        })?;
        Ok(home.join(".gmail-auto-reply"))
    }

    /// Check if the service account key file exists
    pub fn credentials_exist(&self) -> bool {
        self.credentials_path.exists()
    }
}

/// Gmail API constants
pub mod gmail {
    /// Base URL for Gmail API
    pub const API_BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1";

    /// User ID for the impersonated user
    pub const USER_ID: &str = "me";

    /// Scope limited to basic mail settings management
    pub const SETTINGS_BASIC_SCOPE: &str = "https://www.googleapis.com/auth/gmail.settings.basic";
}
