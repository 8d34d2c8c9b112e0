//! Configuration management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ADMIN_BASE_URL, DEFAULT_PUBLIC_DOMAIN, DEFAULT_TIMEOUT_SECS};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub admin: AdminApiConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<PublicApiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationConfig>,
}

/// Admin API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminApiConfig {
    /// Key issued by the business; sent as `Authorization: Basic {api_key}`.
    #[serde(skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_admin_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification for this client only.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl AdminApiConfig {
    /// Configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_admin_base_url(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

impl fmt::Debug for AdminApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/// Member portal configuration for one end user.
#[derive(Clone, Serialize, Deserialize)]
pub struct PublicApiConfig {
    /// Tenant subdomain, e.g. `downtown` for `downtown.spaces.nexudus.com`.
    pub subdomain: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default = "default_public_domain")]
    pub domain: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl PublicApiConfig {
    /// Configuration with defaults for the vendor domain and transport.
    pub fn new(
        subdomain: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            email: email.into(),
            password: password.into(),
            domain: default_public_domain(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

impl fmt::Debug for PublicApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicApiConfig")
            .field("subdomain", &self.subdomain)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("domain", &self.domain)
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/// Marketplace application keys used to verify installation callbacks.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub public_key: String,
    #[serde(skip_serializing)]
    pub secret_key: String,
}

impl fmt::Debug for ApplicationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationConfig")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn default_admin_base_url() -> String {
    DEFAULT_ADMIN_BASE_URL.to_string()
}

fn default_public_domain() -> String {
    DEFAULT_PUBLIC_DOMAIN.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn admin_defaults_fill_missing_fields() {
        let config: AdminApiConfig = serde_json::from_value(json!({ "api_key": "abc" })).unwrap();

        assert_eq!(config.base_url, DEFAULT_ADMIN_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn secrets_are_not_serialized_or_printed() {
        let config = Config {
            admin: AdminApiConfig::new("admin-key"),
            public: Some(PublicApiConfig::new("downtown", "ada@example.com", "hunter2")),
            application: Some(ApplicationConfig {
                public_key: "pub".into(),
                secret_key: "sec".into(),
            }),
        };

        let json = serde_json::to_string(&config).unwrap();
        let debug = format!("{config:?}");
        for secret in ["admin-key", "hunter2", "\"sec\""] {
            assert!(!json.contains(secret), "{secret} leaked into JSON");
            assert!(!debug.contains(secret), "{secret} leaked into Debug");
        }
    }
}
