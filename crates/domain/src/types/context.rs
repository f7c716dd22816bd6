//! Foreground application context and plugin enrichment output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of the frontmost application.
///
/// Every part is optional: apps without a bundle id exist, and window titles
/// need Accessibility permission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_title: Option<String>,
}

impl AppContext {
    /// Context with nothing known.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundle_id.is_none() && self.app_name.is_none() && self.window_title.is_none()
    }
}

/// Structured context an app plugin extracted for one application.
///
/// Advisory only; step acceptance never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Plugin-specific keys, e.g. `file`, `branch`, `detected_command`
    #[serde(default)]
    pub info: BTreeMap<String, String>,
}

impl PluginContext {
    /// Context carrying only a URL (possibly none).
    #[must_use]
    pub fn with_url(url: Option<String>) -> Self {
        Self { url, info: BTreeMap::new() }
    }

    /// Context carrying only info entries.
    #[must_use]
    pub fn with_info(info: BTreeMap<String, String>) -> Self {
        Self { url: None, info }
    }

    /// Look up one info entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.info.get(key).map(String::as_str)
    }
}
