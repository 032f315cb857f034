//! Service account authentication for Gmail API
//!
//! Produces delegated credentials: a token minted from a service account
//! key with domain-wide delegation, acting as one specific mailbox.

use std::fmt;

use async_trait::async_trait;
use yup_oauth2::ServiceAccountAuthenticator;

use crate::config::Config;
use crate::error::{AutoReplyError, Result, ValidationError};
use crate::gmail::utils::validate_email;

/// Short-lived token bound to the mailbox it impersonates
#[derive(Clone)]
pub struct DelegatedCredential {
    user_email: String,
    access_token: String,
}

impl DelegatedCredential {
    /// Wrap a token issued for `user_email`
    pub fn new(user_email: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            access_token: access_token.into(),
        }
    }

    /// Mailbox the token acts as
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Bearer token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for DelegatedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedCredential")
            .field("user_email", &self.user_email)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Source of delegated credentials
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Acquire a credential that acts as `user_email`
    async fn delegated_credential(&self, user_email: &str) -> Result<DelegatedCredential>;
}

/// Credentials minted from a service account key file
pub struct ServiceAccountCredentials {
    config: Config,
}

impl ServiceAccountCredentials {
    /// Create a provider reading the key file named in `config`
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CredentialProvider for ServiceAccountCredentials {
    async fn delegated_credential(&self, user_email: &str) -> Result<DelegatedCredential> {
        if !validate_email(user_email) {
            return Err(AutoReplyError::Validation(ValidationError::InvalidEmail {
                email: user_email.to_string(),
            }));
        }

        let path = &self.config.credentials_path;
        if !self.config.credentials_exist() {
            return Err(AutoReplyError::CredentialFileMissing {
                path: path.display().to_string(),
            });
        }

        let key = yup_oauth2::read_service_account_key(path)
            .await
            .map_err(|e| AutoReplyError::InvalidCredentialFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let authenticator = ServiceAccountAuthenticator::builder(key)
            .subject(user_email)
            .build()
            .await
            .map_err(|e| AutoReplyError::InvalidCredentialFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let token = authenticator.token(self.config.scopes.as_slice()).await?;
        let access_token = token.token().ok_or_else(|| {
            AutoReplyError::Authorization("token response carried no access token".to_string())
        })?;

        tracing::info!("Successfully authenticated using service account.");
        tracing::debug!(user = %user_email, "Delegated token acquired");

        Ok(DelegatedCredential::new(user_email, access_token))
    }
}
