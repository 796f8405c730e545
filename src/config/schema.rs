//! Configuration schema definitions.
//!
//! Section and key names under `Security.Headers` mirror the flat
//! `Security:Headers:*` keys, so the same names work in a TOML file and in
//! environment variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the sample server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security settings (`[Security.Headers]`).
    #[serde(rename = "Security")]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub struct SecurityConfig {
    pub headers: HeadersConfig,
}

/// Security header directives.
///
/// Values are kept as raw strings; [`crate::policy::PolicyBuilder`] decides
/// what they mean and silently skips anything it does not recognise.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub struct HeadersConfig {
    /// `Enabled` adds `X-Content-Type-Options: nosniff`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_sniff: Option<String>,

    /// `DENY`, `SAMEORIGIN`, or an allow-from origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_options: Option<String>,

    /// `1`, `0`, `1; mode=block`, or a report URI.
    #[serde(rename = "XSS", skip_serializing_if = "Option::is_none")]
    pub xss: Option<String>,

    /// `Disabled` strips `X-Powered-By`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powered_by: Option<String>,

    /// `Disabled` strips `Server`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    pub custom: CustomHeadersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub struct CustomHeadersConfig {
    /// Arbitrary header name/value pairs to add.
    pub extra: BTreeMap<String, String>,

    /// Comma-separated header names to strip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<String>,
}

impl HeadersConfig {
    /// Overlay `other` on top of `self`. Values set in `other` win; custom
    /// headers are merged by name.
    pub fn merge(&mut self, other: HeadersConfig) {
        fn overlay(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }

        overlay(&mut self.no_sniff, other.no_sniff);
        overlay(&mut self.frame_options, other.frame_options);
        overlay(&mut self.xss, other.xss);
        overlay(&mut self.powered_by, other.powered_by);
        overlay(&mut self.server, other.server);
        overlay(&mut self.custom.removed, other.custom.removed);
        self.custom.extra.extend(other.custom.extra);
    }
}
