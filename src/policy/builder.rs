//! Fluent construction of a [`Policy`].
//!
//! # Responsibilities
//! - Translate programmatic calls into header additions/removals
//! - Translate a [`HeadersConfig`] into the same calls
//! - Hand out the finished policy behind an `Arc`
//!
//! # Design Decisions
//! - Configuration is permissive: blank or unknown values are skipped
//! - `build()` never resets state; mutation after a build copies first,
//!   so policies already handed out stay untouched

use std::sync::Arc;

use crate::config::HeadersConfig;
use crate::policy::constants::*;
use crate::policy::Policy;

/// Accumulates header directives and produces a shared [`Policy`].
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: Arc<Policy>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn policy_mut(&mut self) -> &mut Policy {
        Arc::make_mut(&mut self.policy)
    }

    /// Add `value` under `name`, accumulating distinct values.
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.policy_mut().add_header(name.into(), value.into());
        self
    }

    /// Add `value` under `name`. With `allow_multiple == false` any previous
    /// values for `name` are replaced.
    pub fn add_header_with(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        allow_multiple: bool,
    ) -> Self {
        self.policy_mut()
            .add_header_with(name.into(), value.into(), allow_multiple);
        self
    }

    pub fn remove_header(mut self, name: impl Into<String>) -> Self {
        self.policy_mut().remove_header(name.into());
        self
    }

    /// `X-Content-Type-Options: nosniff`
    ///
    /// Stops the browser from sniffing MIME types away from the declared
    /// `Content-Type`.
    pub fn add_no_sniff(self) -> Self {
        self.add_header(X_CONTENT_TYPE_OPTIONS, NO_SNIFF)
    }

    /// `X-Frame-Deny: DENY`
    pub fn add_frame_deny_options(self) -> Self {
        self.add_header_with(X_FRAME_DENY_OPTIONS, DENY, false)
    }

    /// `X-Frame-Deny: SAMEORIGIN`
    pub fn add_frame_deny_options_for_same_origin(self) -> Self {
        self.add_header_with(X_FRAME_DENY_OPTIONS, SAMEORIGIN, false)
    }

    /// `X-Frame-Deny: Allow-From <uri>`
    #[deprecated(note = "Allow-From is not supported in modern browsers")]
    pub fn add_frame_deny_option_with_allow_origins(self, uri: &str) -> Self {
        self.add_header_with(X_FRAME_DENY_OPTIONS, format!("{} {}", ALLOW_FROM, uri), false)
    }

    /// `X-XSS-Protection: 1`
    pub fn enable_xss_protection(self) -> Self {
        self.add_header_with(X_XSS_PROTECTION, XSS_ENABLED, false)
    }

    /// `X-XSS-Protection: 0`
    pub fn disable_xss_protection(self) -> Self {
        self.add_header_with(X_XSS_PROTECTION, XSS_DISABLED, false)
    }

    /// `X-XSS-Protection: 1; mode=block`
    pub fn enable_blocking_xss_protection(self) -> Self {
        self.add_header_with(X_XSS_PROTECTION, XSS_BLOCK, false)
    }

    /// `X-XSS-Protection: 1; report=<uri>`
    ///
    /// Chromium only.
    pub fn enable_report_xss_protection(self, reporting_uri: &str) -> Self {
        self.add_header_with(X_XSS_PROTECTION, format!("{}{}", XSS_REPORT, reporting_uri), false)
    }

    /// `Strict-Transport-Security: max-age=<secs>`
    pub fn add_max_age(self, expiration_secs: u64) -> Self {
        self.add_header_with(STRICT_TRANSPORT_SECURITY, max_age(expiration_secs), false)
    }

    /// `Strict-Transport-Security: max-age=<secs>; includeSubDomains`
    pub fn add_max_age_with_sub_domain(self, expiration_secs: u64) -> Self {
        self.add_header_with(
            STRICT_TRANSPORT_SECURITY,
            max_age_include_subdomains(expiration_secs),
            false,
        )
    }

    /// `Strict-Transport-Security: max-age=0`
    pub fn add_no_cache(self) -> Self {
        self.add_max_age(0)
    }

    pub fn add_custom_security_header(
        self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.add_header(name, value)
    }

    /// Strip `X-Powered-By`, which advertises the server technology.
    pub fn remove_powered_by(self) -> Self {
        self.remove_header(X_POWERED_BY)
    }

    /// Strip `Server`, which advertises the web server type.
    pub fn remove_server(self) -> Self {
        self.remove_header(SERVER)
    }

    pub fn remove_custom_header(self, name: impl Into<String>) -> Self {
        self.remove_header(name)
    }

    /// Apply every recognised directive in `config`.
    #[allow(deprecated)]
    pub fn add_from_configuration(mut self, config: &HeadersConfig) -> Self {
        if matches_literal(config.no_sniff.as_deref(), ENABLED) {
            tracing::debug!(key = keys::NO_SNIFF, "Adding no-sniff header");
            self = self.add_no_sniff();
        }

        if let Some(frame_options) = non_blank(config.frame_options.as_deref()) {
            tracing::debug!(key = keys::FRAME_OPTIONS, value = %frame_options, "Adding frame options header");
            self = if frame_options.eq_ignore_ascii_case(DENY) {
                self.add_frame_deny_options()
            } else if frame_options.eq_ignore_ascii_case(SAMEORIGIN) {
                self.add_frame_deny_options_for_same_origin()
            } else {
                self.add_frame_deny_option_with_allow_origins(frame_options)
            };
        }

        if let Some(xss) = non_blank(config.xss.as_deref()) {
            tracing::debug!(key = keys::XSS, value = %xss, "Adding XSS protection header");
            self = if xss.eq_ignore_ascii_case(XSS_ENABLED) {
                self.enable_xss_protection()
            } else if xss.eq_ignore_ascii_case(XSS_DISABLED) {
                self.disable_xss_protection()
            } else if xss.eq_ignore_ascii_case(XSS_BLOCK) {
                self.enable_blocking_xss_protection()
            } else {
                self.enable_report_xss_protection(xss)
            };
        }

        if matches_literal(config.powered_by.as_deref(), DISABLED) {
            tracing::debug!(key = keys::POWERED_BY, "Removing powered-by header");
            self = self.remove_powered_by();
        }

        if matches_literal(config.server.as_deref(), DISABLED) {
            tracing::debug!(key = keys::SERVER, "Removing server header");
            self = self.remove_server();
        }

        for (name, value) in &config.custom.extra {
            if name.trim().is_empty() || value.trim().is_empty() {
                continue;
            }
            tracing::debug!(header = %name, "Adding custom header");
            self = self.add_custom_security_header(name.as_str(), value.as_str());
        }

        if let Some(removed) = non_blank(config.custom.removed.as_deref()) {
            for name in removed.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                tracing::debug!(header = %name, "Removing custom header");
                self = self.remove_custom_header(name);
            }
        }

        self
    }

    /// The accumulated policy. Repeated calls without intervening changes
    /// return the same `Arc`.
    pub fn build(&self) -> Arc<Policy> {
        Arc::clone(&self.policy)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn matches_literal(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case(expected))
}
