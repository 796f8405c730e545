//! Flat key/value configuration sources.
//!
//! Resolves `Security:Headers:*` keys (and their `__`-separated environment
//! variable form) into a [`HeadersConfig`]. Section matching is ASCII
//! case-insensitive; custom header names keep their case.

use std::env;

use crate::config::schema::HeadersConfig;
use crate::policy::constants::keys;

/// Separator used in environment variable names in place of `:`.
pub const ENV_SEPARATOR: &str = "__";

impl HeadersConfig {
    /// Build from flat `Section:Key` pairs. Unrelated keys are ignored; a
    /// key seen twice keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = HeadersConfig::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.into();

            if key.eq_ignore_ascii_case(keys::NO_SNIFF) {
                config.no_sniff = Some(value);
            } else if key.eq_ignore_ascii_case(keys::FRAME_OPTIONS) {
                config.frame_options = Some(value);
            } else if key.eq_ignore_ascii_case(keys::XSS) {
                config.xss = Some(value);
            } else if key.eq_ignore_ascii_case(keys::POWERED_BY) {
                config.powered_by = Some(value);
            } else if key.eq_ignore_ascii_case(keys::SERVER) {
                config.server = Some(value);
            } else if key.eq_ignore_ascii_case(keys::REMOVED) {
                config.custom.removed = Some(value);
            } else if let Some(name) = extra_header_name(key) {
                config.custom.extra.insert(name.to_string(), value);
            }
        }

        config
    }

    /// Build from environment variables such as `Security__Headers__NoSniff`.
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_pairs(env::vars_os().filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let value = value.into_string().ok()?;
            Some((key.replace(ENV_SEPARATOR, ":"), value))
        }))
    }
}

/// `Security:Headers:Custom:Extra:<Name>` → `<Name>`
fn extra_header_name(key: &str) -> Option<&str> {
    let prefix_len = keys::EXTRA.len();
    let prefix = key.get(..prefix_len)?;
    if !prefix.eq_ignore_ascii_case(keys::EXTRA) {
        return None;
    }
    key[prefix_len..]
        .strip_prefix(':')
        .filter(|name| !name.is_empty())
}
