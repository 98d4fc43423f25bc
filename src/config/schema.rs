use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::DEFAULT_OVERRIDE_CREDITS;
use crate::storage::DEFAULT_NAMESPACE;

/// Calculator configuration.
///
/// Example YAML:
/// ```yaml
/// store_dir: /home/me/.local/share/cgpa-calc
/// namespace: cgpa_calc
/// override_credits: 20
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding persisted draft state (default: ~/.config/cgpa-calc/store)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,

    /// Prefix of every storage key (default: "cgpa_calc")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Credit weight of a cycle whose SGPA is entered directly (default: 20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_credits: Option<u32>,
}

impl Config {
    pub fn store_dir(&self) -> PathBuf {
        self.store_dir
            .clone()
            .unwrap_or_else(super::get_default_store_dir)
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn override_credits(&self) -> u32 {
        self.override_credits.unwrap_or(DEFAULT_OVERRIDE_CREDITS)
    }

    /// Config with every field spelled out, as written by `init`.
    pub fn with_defaults() -> Self {
        Self {
            store_dir: Some(super::get_default_store_dir()),
            namespace: Some(DEFAULT_NAMESPACE.to_string()),
            override_credits: Some(DEFAULT_OVERRIDE_CREDITS),
        }
    }
}
