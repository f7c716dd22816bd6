//! VS Code plugin - file, project and branch from the window title
//!
//! Titles: `file - folder - Visual Studio Code`, optionally with a
//! parenthesised workspace or branch after the folder:
//! `main.rs - stepcast (feature/x) - Visual Studio Code`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use stepcast_domain::utils::split_segments;
use stepcast_domain::PluginContext;

use super::AppPlugin;

const VSCODE_BUNDLE_IDS: &[&str] =
    &["com.microsoft.VSCode", "com.microsoft.VSCodeInsiders", "com.vscodium"];

/// First parenthesised group in the folder segment
#[allow(clippy::expect_used)]
fn branch_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(([^)]+)\)").expect("branch pattern is a valid literal"))
}

/// Extracts `file`, `project` and `branch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VsCodePlugin;

impl AppPlugin for VsCodePlugin {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn supported_bundle_ids(&self) -> &'static [&'static str] {
        VSCODE_BUNDLE_IDS
    }

    fn extract(&self, bundle_id: &str, window_title: Option<&str>) -> Option<PluginContext> {
        if !self.supports(bundle_id) {
            return None;
        }
        let parts = split_segments(window_title?, " - ");

        let mut info = BTreeMap::new();
        if parts.len() >= 2 {
            info.insert("file".to_string(), parts[0].clone());
        }
        if parts.len() >= 3 {
            let folder = &parts[1];
            if let Some(branch) = branch_regex().captures(folder).and_then(|caps| caps.get(1)) {
                info.insert("branch".to_string(), branch.as_str().to_string());
            }
            let project = folder.split(" (").next().unwrap_or(folder);
            info.insert("project".to_string(), project.to_string());
        }

        Some(PluginContext::with_info(info))
    }
}
