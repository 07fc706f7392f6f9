//! Server configuration from the environment.
//!
//! | Variable                  | Default              |
//! |---------------------------|----------------------|
//! | `JJ_BIND_ADDR`            | `127.0.0.1:3000`     |
//! | `JJ_STATIC_DIR`           | `static`             |
//! | `WEB3FORMS_ACCESS_KEY`    | unset (contact off)  |
//! | `WEB3FORMS_URL`           | Web3Forms submit URL |
//! | `JJ_CONTACT_TIMEOUT_SECS` | `15`                 |

use std::net::SocketAddr;

use crate::contact::ContactClientConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static asset directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Contact form settings; `None` when no access key is configured.
    pub contact: Option<ContactClientConfig>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("JJ_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse().map_err(|_| ConfigError {
            var: "JJ_BIND_ADDR",
            value: bind_raw.clone(),
            reason: "expected host:port",
        })?;

        let static_dir = get("JJ_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let contact = match get("WEB3FORMS_ACCESS_KEY") {
            None => None,
            Some(key) => {
                let mut config = ContactClientConfig::new(key.trim());
                if let Some(url) = get("WEB3FORMS_URL") {
                    config = config.with_endpoint(url.trim());
                }
                if let Some(raw) = get("JJ_CONTACT_TIMEOUT_SECS") {
                    let secs = raw
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|s| *s > 0)
                        .ok_or_else(|| ConfigError {
                            var: "JJ_CONTACT_TIMEOUT_SECS",
                            value: raw.clone(),
                            reason: "expected a positive number of seconds",
                        })?;
                    config = config.with_timeout(secs);
                }
                Some(config)
            }
        };

        Ok(Self {
            bind_addr,
            static_dir,
            contact,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            contact: None,
        }
    }
}
