//! The `actions.json` discovery document.
//!
//! Served from the root of a domain, it tells clients which website paths map
//! to action API paths, so a wallet that encounters `https://host/<path>` knows
//! where to fetch the action metadata from.

use serde::{Deserialize, Serialize};

/// The `actions.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsJson {
    /// Path mapping rules, evaluated in order.
    pub rules: Vec<ActionRule>,
}

/// A single path mapping rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    /// Website path pattern (`*` matches one segment, `**` any number).
    pub path_pattern: String,
    /// Action API path the pattern maps to.
    pub api_path: String,
}

impl ActionRule {
    /// Creates a rule mapping `path_pattern` to `api_path`.
    pub fn new<P: Into<String>, A: Into<String>>(path_pattern: P, api_path: A) -> Self {
        Self {
            path_pattern: path_pattern.into(),
            api_path: api_path.into(),
        }
    }
}

impl ActionsJson {
    /// The document for a host serving every action under `/api/actions/`.
    ///
    /// Contains two rules: root paths map into the action API, and the action
    /// API maps onto itself.
    #[must_use]
    pub fn passthrough() -> Self {
        Self {
            rules: vec![
                ActionRule::new("/*", "/api/actions/*"),
                ActionRule::new("/api/actions/**", "/api/actions/**"),
            ],
        }
    }
}

impl Default for ActionsJson {
    fn default() -> Self {
        Self::passthrough()
    }
}
