//! Gmail API types
//!
//! Request/response structures for the vacation responder settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Auto-reply settings (Gmail's `VacationSettings` resource)
///
/// Only the HTML body is modelled. Unknown fields in API responses, such as
/// `responseBodyPlainText` or the start/end times, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoReplyConfig {
    /// Whether the auto-reply is active
    #[serde(rename = "enableAutoReply", default)]
    pub enabled: bool,

    /// Reply subject line
    #[serde(rename = "responseSubject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Reply body as HTML
    #[serde(rename = "responseBodyHtml", skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// Only reply to known contacts
    #[serde(rename = "restrictToContacts", skip_serializing_if = "Option::is_none")]
    pub restrict_to_contacts: Option<bool>,

    /// Only reply to senders in the same domain
    #[serde(rename = "restrictToDomain", skip_serializing_if = "Option::is_none")]
    pub restrict_to_domain: Option<bool>,
}

impl AutoReplyConfig {
    /// Settings that switch the auto-reply off and carry nothing else
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Full replacement settings for an active auto-reply
    pub fn enabled(
        subject: impl Into<String>,
        body_html: impl Into<String>,
        restrict_to_contacts: bool,
        restrict_to_domain: bool,
    ) -> Self {
        Self {
            enabled: true,
            subject: Some(subject.into()),
            body_html: Some(body_html.into()),
            restrict_to_contacts: Some(restrict_to_contacts),
            restrict_to_domain: Some(restrict_to_domain),
        }
    }
}

/// Settings echoed back by the service, with the body exactly as received
#[derive(Debug, Clone, PartialEq)]
pub struct VacationResponse {
    /// The modelled fields
    pub settings: AutoReplyConfig,

    /// The full response, including fields `settings` does not model
    pub raw: Value,
}

impl VacationResponse {
    /// Parse a response body, keeping the original alongside
    pub fn from_raw(raw: Value) -> Result<Self> {
        let settings = serde_json::from_value(raw.clone())?;
        Ok(Self { settings, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_serializes_single_field() {
        let json = serde_json::to_value(AutoReplyConfig::disabled()).unwrap();
        assert_eq!(json, serde_json::json!({ "enableAutoReply": false }));
    }

    #[test]
    fn test_enabled_serialize() {
        let config = AutoReplyConfig::enabled("Out of Office", "<p>Away</p>", false, false);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["enableAutoReply"], true);
        assert_eq!(json["responseSubject"], "Out of Office");
        assert_eq!(json["responseBodyHtml"], "<p>Away</p>");
        assert_eq!(json["restrictToContacts"], false);
        assert_eq!(json["restrictToDomain"], false);
        assert!(json.get("responseBodyPlainText").is_none());
    }

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "enableAutoReply": true,
            "responseSubject": "Hi",
            "responseBodyHtml": "<p>x</p>",
            "responseBodyPlainText": "x",
            "startTime": "1700000000000"
        }"#;
        let config: AutoReplyConfig = serde_json::from_str(json).unwrap();
        assert!(config.enabled);
        assert_eq!(config.subject.as_deref(), Some("Hi"));
        assert_eq!(config.body_html.as_deref(), Some("<p>x</p>"));
        assert_eq!(config.restrict_to_contacts, None);
        assert_eq!(config.restrict_to_domain, None);
    }

    #[test]
    fn test_empty_response_is_disabled() {
        let config: AutoReplyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AutoReplyConfig::disabled());
    }

    #[test]
    fn test_response_keeps_unmodelled_fields() {
        let raw = serde_json::json!({
            "enableAutoReply": true,
            "responseSubject": "Hi",
            "responseBodyPlainText": "x",
            "endTime": "1700000000000"
        });
        let response = VacationResponse::from_raw(raw.clone()).unwrap();
        assert!(response.settings.enabled);
        assert_eq!(response.raw, raw);
        assert_eq!(response.raw["responseBodyPlainText"], "x");
    }
}
