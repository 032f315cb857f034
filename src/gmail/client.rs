//! Gmail API client
//!
//! Reads and replaces the vacation responder settings of the mailbox a
//! delegated credential acts as.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::gmail::{API_BASE_URL, USER_ID};
use crate::error::{AutoReplyError, Result};
use crate::gmail::auth::DelegatedCredential;
use crate::gmail::types::{AutoReplyConfig, VacationResponse};

/// Remote auto-reply settings, as seen by the acting user
#[async_trait]
pub trait VacationSettingsApi: Send + Sync {
    /// Fetch the current settings
    async fn get_vacation(&self, credential: &DelegatedCredential) -> Result<AutoReplyConfig>;

    /// Replace the settings, returning what the service applied
    async fn update_vacation(
        &self,
        credential: &DelegatedCredential,
        settings: &AutoReplyConfig,
    ) -> Result<VacationResponse>;
}

/// Gmail API client
pub struct GmailClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// Base URL for Gmail API
    base_url: String,
}

impl GmailClient {
    /// Create a client against the public Gmail endpoint
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against another endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the vacation settings resource
    fn vacation_url(&self) -> String {
        format!("{}/users/{}/settings/vacation", self.base_url, USER_ID)
    }

    /// Turn a response into its JSON body or a classified error
    async fn parse_response(response: reqwest::Response, action: &str) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AutoReplyError::Authorization(
                format!("Failed to {} ({}): {}", action, status, text),
            )),
            _ => Err(AutoReplyError::RemoteCall {
                status: status.as_u16(),
                message: format!("Failed to {}: {}", action, text),
            }),
        }
    }
}

impl Default for GmailClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VacationSettingsApi for GmailClient {
    async fn get_vacation(&self, credential: &DelegatedCredential) -> Result<AutoReplyConfig> {
        let response = self
            .http_client
            .get(self.vacation_url())
            .bearer_auth(credential.access_token())
            .send()
            .await?;

        let body = Self::parse_response(response, "get vacation settings").await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn update_vacation(
        &self,
        credential: &DelegatedCredential,
        settings: &AutoReplyConfig,
    ) -> Result<VacationResponse> {
        let response = self
            .http_client
            .put(self.vacation_url())
            .bearer_auth(credential.access_token())
            .json(settings)
            .send()
            .await?;

        let body = Self::parse_response(response, "update vacation settings").await?;
        VacationResponse::from_raw(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacation_url() {
        let client = GmailClient::new();
        assert_eq!(
            client.vacation_url(),
            "https://gmail.googleapis.com/gmail/v1/users/me/settings/vacation"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GmailClient::with_base_url("http://127.0.0.1:8080/gmail/v1/");
        assert_eq!(
            client.vacation_url(),
            "http://127.0.0.1:8080/gmail/v1/users/me/settings/vacation"
        );
    }
}
