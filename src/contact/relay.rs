//! Relay strategies: how a contact form is encoded for a hosted
//! form-to-email service and how that service's answer is read.

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::ContactFields;

pub const FORMSUBMIT_BASE: &str = "https://formsubmit.co/ajax";
pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay responded with status {0}")]
    Status(u16),
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
    #[error("couldn't read relay response: {0}")]
    Decode(String),
    #[error("couldn't encode submission: {0}")]
    Encode(String),
    #[error("no transport available outside the browser")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    Json(serde_json::Value),
    /// Ordered `(field, value)` pairs sent as `multipart/form-data`.
    Multipart(Vec<(&'static str, String)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    pub endpoint: String,
    pub body: RelayBody,
}

impl RelayRequest {
    /// Value of a multipart field, if this is a multipart request.
    pub fn field(&self, name: &str) -> Option<&str> {
        match &self.body {
            RelayBody::Multipart(parts) => parts
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.as_str()),
            RelayBody::Json(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

impl RelayReply {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A hosted form relay.
pub trait Relay {
    fn name(&self) -> &'static str;

    fn request(&self, fields: &ContactFields) -> Result<RelayRequest, RelayError>;

    /// Maps the relay's answer to success or the reason it failed.
    fn accept(&self, reply: &RelayReply) -> Result<(), RelayError> {
        accept_flagged(reply)
    }
}

#[derive(Deserialize)]
struct Ack {
    #[serde(deserialize_with = "flag")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

// FormSubmit reports `"success": "true"`, the others a real bool.
fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }
    Ok(match Flag::deserialize(d)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

fn accept_flagged(reply: &RelayReply) -> Result<(), RelayError> {
    let status = StatusCode::from_u16(reply.status).map_err(|_| RelayError::Status(reply.status))?;
    if !status.is_success() {
        return Err(RelayError::Status(reply.status));
    }
    let ack: Ack =
        serde_json::from_str(&reply.body).map_err(|e| RelayError::Decode(e.to_string()))?;
    if ack.success {
        Ok(())
    } else {
        Err(RelayError::Rejected(
            ack.message.unwrap_or_else(|| "no reason given".to_string()),
        ))
    }
}

/// Relay that takes a JSON body and answers `{"success": true}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRelay {
    pub endpoint: String,
}

impl Relay for JsonRelay {
    fn name(&self) -> &'static str {
        "json"
    }

    fn request(&self, fields: &ContactFields) -> Result<RelayRequest, RelayError> {
        let body = serde_json::to_value(fields).map_err(|e| RelayError::Encode(e.to_string()))?;
        Ok(RelayRequest {
            endpoint: self.endpoint.clone(),
            body: RelayBody::Json(body),
        })
    }
}

/// formsubmit.co AJAX endpoint, keyed by the recipient address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmitRelay {
    pub endpoint: String,
}

impl FormSubmitRelay {
    pub fn for_recipient(recipient: &str) -> Self {
        Self {
            endpoint: format!("{FORMSUBMIT_BASE}/{recipient}"),
        }
    }
}

impl Relay for FormSubmitRelay {
    fn name(&self) -> &'static str {
        "formsubmit"
    }

    fn request(&self, fields: &ContactFields) -> Result<RelayRequest, RelayError> {
        Ok(RelayRequest {
            endpoint: self.endpoint.clone(),
            body: RelayBody::Multipart(vec![
                ("name", fields.name.clone()),
                ("sender_email", fields.email.clone()),
                ("subject", fields.subject.clone()),
                ("message", fields.message.clone()),
                ("_captcha", "false".to_string()),
                ("_template", "table".to_string()),
            ]),
        })
    }
}

/// web3forms, authenticated by a public access key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3FormsRelay {
    pub endpoint: String,
    pub access_key: String,
}

impl Relay for Web3FormsRelay {
    fn name(&self) -> &'static str {
        "web3forms"
    }

    fn request(&self, fields: &ContactFields) -> Result<RelayRequest, RelayError> {
        Ok(RelayRequest {
            endpoint: self.endpoint.clone(),
            body: RelayBody::Multipart(vec![
                ("access_key", self.access_key.clone()),
                ("redirect", "false".to_string()),
                ("name", fields.name.clone()),
                ("sender_email", fields.email.clone()),
                // reply-to address
                ("email", fields.email.clone()),
                ("subject", fields.subject.clone()),
                ("message", fields.message.clone()),
                ("botcheck", fields.honeypot.clone()),
            ]),
        })
    }
}

/// The relay a site build is configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RelayConfig {
    Json { endpoint: String },
    FormSubmit { endpoint: String },
    Web3Forms { endpoint: String, access_key: String },
}

impl RelayConfig {
    pub fn formsubmit(recipient: &str) -> Self {
        Self::FormSubmit {
            endpoint: FormSubmitRelay::for_recipient(recipient).endpoint,
        }
    }

    pub fn web3forms(access_key: &str) -> Self {
        Self::Web3Forms {
            endpoint: WEB3FORMS_ENDPOINT.to_string(),
            access_key: access_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Json { endpoint }
            | Self::FormSubmit { endpoint }
            | Self::Web3Forms { endpoint, .. } => endpoint,
        }
    }
}

impl Relay for RelayConfig {
    fn name(&self) -> &'static str {
        match self {
            Self::Json { .. } => "json",
            Self::FormSubmit { .. } => "formsubmit",
            Self::Web3Forms { .. } => "web3forms",
        }
    }

    fn request(&self, fields: &ContactFields) -> Result<RelayRequest, RelayError> {
        match self {
            Self::Json { endpoint } => JsonRelay {
                endpoint: endpoint.clone(),
            }
            .request(fields),
            Self::FormSubmit { endpoint } => FormSubmitRelay {
                endpoint: endpoint.clone(),
            }
            .request(fields),
            Self::Web3Forms {
                endpoint,
                access_key,
            } => Web3FormsRelay {
                endpoint: endpoint.clone(),
                access_key: access_key.clone(),
            }
            .request(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ada() -> ContactFields {
        ContactFields::new("Ada", "ada@example.com", "Hi", "Hello")
    }

    #[test]
    fn test_json_body() {
        let relay = JsonRelay {
            endpoint: "https://relay.example.com/send".to_string(),
        };
        let mut fields = ada();
        fields.honeypot = "bot".to_string();
        let req = relay.request(&fields).unwrap();

        assert_eq!(req.endpoint, "https://relay.example.com/send");
        assert_eq!(
            req.body,
            RelayBody::Json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Hello",
            }))
        );
        assert_eq!(req.field("name"), None);
    }

    #[test]
    fn test_formsubmit_fields() {
        let relay = FormSubmitRelay::for_recipient("me@example.com");
        let req = relay.request(&ada()).unwrap();

        assert_eq!(req.endpoint, "https://formsubmit.co/ajax/me@example.com");
        assert_eq!(req.field("name"), Some("Ada"));
        assert_eq!(req.field("sender_email"), Some("ada@example.com"));
        assert_eq!(req.field("subject"), Some("Hi"));
        assert_eq!(req.field("message"), Some("Hello"));
        assert_eq!(req.field("_captcha"), Some("false"));
        assert_eq!(req.field("_template"), Some("table"));
        assert_eq!(req.field("access_key"), None);
    }

    #[test]
    fn test_web3forms_fields() {
        let relay = RelayConfig::web3forms("public-key");
        let req = relay.request(&ada()).unwrap();

        assert_eq!(req.endpoint, WEB3FORMS_ENDPOINT);
        assert_eq!(req.field("access_key"), Some("public-key"));
        assert_eq!(req.field("redirect"), Some("false"));
        assert_eq!(req.field("sender_email"), Some("ada@example.com"));
        assert_eq!(req.field("email"), Some("ada@example.com"));
        assert_eq!(req.field("botcheck"), Some(""));
        assert_eq!(req.field("_captcha"), None);
    }

    #[test]
    fn test_accept_success_flags() {
        let relay = RelayConfig::formsubmit("me@example.com");
        assert_eq!(relay.accept(&RelayReply::new(200, r#"{"success": true}"#)), Ok(()));
        assert_eq!(
            relay.accept(&RelayReply::new(200, r#"{"success": "true", "message": "sent"}"#)),
            Ok(())
        );
        assert_eq!(
            relay.accept(&RelayReply::new(200, r#"{"success": "false", "message": "nope"}"#)),
            Err(RelayError::Rejected("nope".to_string()))
        );
        assert_eq!(
            relay.accept(&RelayReply::new(200, r#"{"success": false}"#)),
            Err(RelayError::Rejected("no reason given".to_string()))
        );
    }

    #[test]
    fn test_accept_failures() {
        let relay = RelayConfig::web3forms("public-key");
        assert_eq!(
            relay.accept(&RelayReply::new(403, r#"{"success": true}"#)),
            Err(RelayError::Status(403))
        );
        assert!(matches!(
            relay.accept(&RelayReply::new(200, "<html>oops</html>")),
            Err(RelayError::Decode(_))
        ));
        assert!(matches!(
            relay.accept(&RelayReply::new(200, r#"{"message": "missing flag"}"#)),
            Err(RelayError::Decode(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let cfg: RelayConfig =
            serde_json::from_str(r#"{"kind": "web3forms", "endpoint": "https://x", "access_key": "k"}"#)
                .unwrap();
        assert_eq!(
            cfg,
            RelayConfig::Web3Forms {
                endpoint: "https://x".to_string(),
                access_key: "k".to_string(),
            }
        );
        assert_eq!(cfg.endpoint(), "https://x");
        assert_eq!(cfg.name(), "web3forms");
    }
}
