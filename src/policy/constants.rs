//! Well-known header names, header values and configuration keys.

/// Configuration literal that switches a header on.
pub const ENABLED: &str = "Enabled";
/// Configuration literal that strips a header.
pub const DISABLED: &str = "Disabled";

// No sniff
pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub const NO_SNIFF: &str = "nosniff";

// Server identification
pub const X_POWERED_BY: &str = "X-Powered-By";
pub const SERVER: &str = "Server";

// Frame options
pub const X_FRAME_DENY_OPTIONS: &str = "X-Frame-Deny";
pub const DENY: &str = "DENY";
pub const SAMEORIGIN: &str = "SAMEORIGIN";
pub const ALLOW_FROM: &str = "Allow-From";

// XSS
pub const X_XSS_PROTECTION: &str = "X-XSS-Protection";
pub const XSS_ENABLED: &str = "1";
pub const XSS_DISABLED: &str = "0";
pub const XSS_BLOCK: &str = "1; mode=block";
pub const XSS_REPORT: &str = "1; report=";

// Transport security
pub const STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";

/// `max-age=<secs>`
pub fn max_age(secs: u64) -> String {
    format!("max-age={}", secs)
}

/// `max-age=<secs>; includeSubDomains`
pub fn max_age_include_subdomains(secs: u64) -> String {
    format!("max-age={}; includeSubDomains", secs)
}

/// Flat configuration keys, `:`-separated.
pub mod keys {
    pub const NO_SNIFF: &str = "Security:Headers:NoSniff";
    pub const FRAME_OPTIONS: &str = "Security:Headers:FrameOptions";
    pub const XSS: &str = "Security:Headers:XSS";
    pub const POWERED_BY: &str = "Security:Headers:PoweredBy";
    pub const SERVER: &str = "Security:Headers:Server";
    pub const EXTRA: &str = "Security:Headers:Custom:Extra";
    pub const REMOVED: &str = "Security:Headers:Custom:Removed";
}
