//! Contact form configuration.
//!
//! Relay selection and credentials are captured from the build environment
//! by `build.rs` and compiled into both the server and the WASM bundle:
//!
//! | variable                 | meaning                                        |
//! |--------------------------|------------------------------------------------|
//! | `CONTACT_RELAY`          | `formsubmit` (default), `web3forms` or `json`  |
//! | `CONTACT_ENDPOINT`       | overrides the relay URL (required for `json`)  |
//! | `CONTACT_RECIPIENT`      | formsubmit recipient, defaults to the fallback |
//! | `CONTACT_ACCESS_KEY`     | web3forms access key                           |
//! | `CONTACT_FALLBACK_EMAIL` | address shown when sending fails               |

use thiserror::Error;

use crate::contact::relay::{RelayConfig, WEB3FORMS_ENDPOINT};

pub const DEFAULT_FALLBACK_EMAIL: &str = "contact@example.com";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown contact relay `{0}`")]
    UnknownRelay(String),
    #[error("{0} must be set for the selected relay")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub relay: RelayConfig,
    pub fallback_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::formsubmit(DEFAULT_FALLBACK_EMAIL),
            fallback_email: DEFAULT_FALLBACK_EMAIL.to_string(),
        }
    }
}

impl ContactConfig {
    /// Builds the configuration from `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fallback_email =
            get("CONTACT_FALLBACK_EMAIL").unwrap_or_else(|| DEFAULT_FALLBACK_EMAIL.to_string());
        let endpoint = get("CONTACT_ENDPOINT");
        let kind = get("CONTACT_RELAY").unwrap_or_else(|| "formsubmit".to_string());

        let relay = match kind.to_lowercase().as_str() {
            "formsubmit" => match endpoint {
                Some(endpoint) => RelayConfig::FormSubmit { endpoint },
                None => RelayConfig::formsubmit(
                    &get("CONTACT_RECIPIENT").unwrap_or_else(|| fallback_email.clone()),
                ),
            },
            "web3forms" => RelayConfig::Web3Forms {
                endpoint: endpoint.unwrap_or_else(|| WEB3FORMS_ENDPOINT.to_string()),
                access_key: get("CONTACT_ACCESS_KEY")
                    .ok_or(ConfigError::Missing("CONTACT_ACCESS_KEY"))?,
            },
            "json" => RelayConfig::Json {
                endpoint: endpoint.ok_or(ConfigError::Missing("CONTACT_ENDPOINT"))?,
            },
            other => return Err(ConfigError::UnknownRelay(other.to_string())),
        };

        Ok(Self {
            relay,
            fallback_email,
        })
    }

    /// The configuration this binary was built with. A broken build
    /// environment falls back to the default relay.
    pub fn compiled() -> Self {
        let lookup = |key: &str| {
            let value = match key {
                "CONTACT_RELAY" => option_env!("CONTACT_RELAY"),
                "CONTACT_ENDPOINT" => option_env!("CONTACT_ENDPOINT"),
                "CONTACT_RECIPIENT" => option_env!("CONTACT_RECIPIENT"),
                "CONTACT_ACCESS_KEY" => option_env!("CONTACT_ACCESS_KEY"),
                "CONTACT_FALLBACK_EMAIL" => option_env!("CONTACT_FALLBACK_EMAIL"),
                _ => None,
            };
            value.map(str::to_string)
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            log::warn!("invalid contact configuration, using defaults: {e}");
            Self::default()
        })
    }
}
