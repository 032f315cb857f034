//! Out-of-office operations
//!
//! The two user-facing operations: install a new auto-reply and report the
//! current one. Both log their own failures and hand back a `Result`, so a
//! caller can rely on either the log or the return value.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::gmail::auth::{CredentialProvider, ServiceAccountCredentials};
use crate::gmail::client::{GmailClient, VacationSettingsApi};
use crate::gmail::types::{AutoReplyConfig, VacationResponse};

/// Placeholder for fields missing from the remote settings
const NOT_SET: &str = "Not Set";

/// Runs auto-reply operations against the remote settings
pub struct AutoReplyManager {
    config: Config,
    credentials: Arc<dyn CredentialProvider>,
    api: Arc<dyn VacationSettingsApi>,
}

impl AutoReplyManager {
    /// Create a manager from explicit collaborators
    pub fn new(
        config: Config,
        credentials: Arc<dyn CredentialProvider>,
        api: Arc<dyn VacationSettingsApi>,
    ) -> Self {
        Self {
            config,
            credentials,
            api,
        }
    }

    /// Create a manager that talks to Gmail with a service account key
    pub fn from_config(config: Config) -> Self {
        let credentials = Arc::new(ServiceAccountCredentials::new(config.clone()));
        let api = Arc::new(GmailClient::with_base_url(config.api_base_url.clone()));
        Self::new(config, credentials, api)
    }

    /// Replace the user's auto-reply with an HTML reply sent to everyone
    ///
    /// Any existing reply is switched off first, then the new settings are
    /// written after `Config::propagation_delay`. The two writes are not
    /// atomic: a failed disable is logged and the new settings are still
    /// attempted.
    pub async fn set_out_of_office(
        &self,
        user_email: &str,
        subject: &str,
        message_html: &str,
    ) -> Result<VacationResponse> {
        info!("Attempting to set out-of-office reply for: {}", user_email);

        let result = self.replace_auto_reply(user_email, subject, message_html).await;
        if let Err(ref e) = result {
            error!("{}", e.log_message());
        }
        result
    }

    async fn replace_auto_reply(
        &self,
        user_email: &str,
        subject: &str,
        message_html: &str,
    ) -> Result<VacationResponse> {
        let credential = self.credentials.delegated_credential(user_email).await?;

        match self
            .api
            .update_vacation(&credential, &AutoReplyConfig::disabled())
            .await
        {
            Ok(_) => info!("Existing out-of-office reply disabled."),
            Err(e) => warn!(
                "Could not disable existing out-of-office reply, continuing: {}",
                e
            ),
        }

        tokio::time::sleep(self.config.propagation_delay).await;

        let settings = AutoReplyConfig::enabled(
            subject,
            message_html,
            self.config.restrict_to_contacts,
            self.config.restrict_to_domain,
        );
        let applied = self.api.update_vacation(&credential, &settings).await?;

        info!("Out-of-office reply set successfully for {}.", user_email);
        info!("Response: {}", applied.raw);

        Ok(applied)
    }

    /// Print the user's current auto-reply to stdout
    pub async fn get_out_of_office_status(&self, user_email: &str) -> Result<StatusReport> {
        let mut stdout = std::io::stdout();
        self.get_out_of_office_status_to(user_email, &mut stdout)
            .await
    }

    /// Render the user's current auto-reply to `out`
    pub async fn get_out_of_office_status_to<W: Write + Send>(
        &self,
        user_email: &str,
        out: &mut W,
    ) -> Result<StatusReport> {
        info!("Checking out-of-office status for: {}", user_email);

        let result = self.fetch_status(user_email, out).await;
        if let Err(ref e) = result {
            error!("{}", e.log_message());
        }
        result
    }

    async fn fetch_status<W: Write + Send>(
        &self,
        user_email: &str,
        out: &mut W,
    ) -> Result<StatusReport> {
        let credential = self.credentials.delegated_credential(user_email).await?;
        let settings = self.api.get_vacation(&credential).await?;
        let report = StatusReport::new(settings);

        if report.is_on() {
            info!("Out of office is currently ON.");
        } else {
            info!("Out of office is currently OFF.");
        }

        write!(out, "{}", report)?;
        out.flush()?;

        Ok(report)
    }
}

/// Human-readable view of the remote auto-reply settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    settings: AutoReplyConfig,
}

impl StatusReport {
    /// Wrap settings fetched from the service
    pub fn new(settings: AutoReplyConfig) -> Self {
        Self { settings }
    }

    /// Whether the auto-reply is active
    pub fn is_on(&self) -> bool {
        self.settings.enabled
    }

    /// The settings as received
    pub fn settings(&self) -> &AutoReplyConfig {
        &self.settings
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- CURRENT OUT OF OFFICE SETTINGS ---")?;

        if !self.settings.enabled {
            return writeln!(f, "Status: OFF");
        }

        let s = &self.settings;
        writeln!(f, "Status: ON")?;
        writeln!(f, "Subject: {}", s.subject.as_deref().unwrap_or(NOT_SET))?;
        writeln!(
            f,
            "Rich Text Message: {}",
            s.body_html.as_deref().unwrap_or(NOT_SET)
        )?;
        writeln!(
            f,
            "Only send to contacts: {}",
            s.restrict_to_contacts.unwrap_or(false)
        )?;
        writeln!(
            f,
            "Only send within domain: {}",
            s.restrict_to_domain.unwrap_or(false)
        )
    }
}
