//! Security header policy.
//!
//! # Data Flow
//! ```text
//! HeadersConfig / programmatic calls
//!     → builder.rs (PolicyBuilder accumulates directives)
//!     → Policy (immutable, shared via Arc)
//!     → http::middleware applies it to every response
//! ```
//!
//! # Design Decisions
//! - A header name appears in `added` once; its value list accumulates
//! - `added` iterates in insertion order, so the first of two names that
//!   differ only by case is the one applied
//! - Single-value headers replace the list wholesale
//! - `removed` keeps insertion order and never holds duplicates

pub mod builder;
pub mod constants;

use indexmap::IndexMap;

pub use builder::PolicyBuilder;

/// Header additions and removals applied to every outgoing response.
///
/// Header names are stored exactly as supplied; no HTTP grammar checks are
/// made here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    added: IndexMap<String, Vec<String>>,
    removed: Vec<String>,
}

impl Policy {
    /// Headers to add, keyed by name.
    pub fn added(&self) -> &IndexMap<String, Vec<String>> {
        &self.added
    }

    /// Values configured for `name`, if any.
    pub fn added_values(&self, name: &str) -> Option<&[String]> {
        self.added.get(name).map(Vec::as_slice)
    }

    /// Header names stripped from responses, in insertion order.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Append `value` to an existing entry unless it is already there;
    /// otherwise the entry becomes `[value]`.
    pub(crate) fn add_header(&mut self, name: String, value: String) {
        match self.added.get_mut(&name) {
            Some(values) if !values.contains(&value) => values.push(value),
            _ => {
                self.added.insert(name, vec![value]);
            }
        }
    }

    pub(crate) fn add_header_with(&mut self, name: String, value: String, allow_multiple: bool) {
        if allow_multiple {
            self.add_header(name, value);
        } else {
            self.added.insert(name, vec![value]);
        }
    }

    pub(crate) fn remove_header(&mut self, name: String) {
        if !self.removed.contains(&name) {
            self.removed.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_value_accumulates() {
        let mut policy = Policy::default();
        policy.add_header("X-Custom".into(), "a".into());
        policy.add_header("X-Custom".into(), "b".into());
        assert_eq!(policy.added_values("X-Custom"), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_readding_existing_value_leaves_single_entry() {
        let mut policy = Policy::default();
        policy.add_header("X-Custom".into(), "a".into());
        policy.add_header("X-Custom".into(), "a".into());
        assert_eq!(policy.added_values("X-Custom"), Some(&["a".to_string()][..]));
    }

    #[test]
    fn test_single_value_replaces_list() {
        let mut policy = Policy::default();
        policy.add_header("X-Custom".into(), "a".into());
        policy.add_header("X-Custom".into(), "b".into());
        policy.add_header_with("X-Custom".into(), "c".into(), false);
        assert_eq!(policy.added_values("X-Custom"), Some(&["c".to_string()][..]));
        assert_eq!(policy.added().len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut policy = Policy::default();
        policy.add_header("x-custom".into(), "a".into());
        policy.add_header("X-Custom".into(), "b".into());
        assert_eq!(policy.added().len(), 2);
    }

    #[test]
    fn test_added_keeps_insertion_order() {
        let mut policy = Policy::default();
        policy.add_header("x-custom".into(), "first".into());
        policy.add_header("X-Custom".into(), "second".into());
        policy.add_header_with("x-custom".into(), "replaced".into(), false);

        let names: Vec<_> = policy.added().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["x-custom", "X-Custom"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut policy = Policy::default();
        policy.remove_header("Server".into());
        policy.remove_header("Server".into());
        policy.remove_header("X-Powered-By".into());
        assert_eq!(policy.removed(), &["Server".to_string(), "X-Powered-By".to_string()]);
        assert!(!policy.is_empty());
    }
}
