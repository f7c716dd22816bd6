//! Terminal plugin - working directory and command from the window title
//!
//! Terminal titles usually look like `user@host: ~/path` or
//! `vim -- user@host`.

use std::collections::BTreeMap;

use stepcast_domain::utils::last_segment;
use stepcast_domain::PluginContext;

use super::AppPlugin;

const TERMINAL_BUNDLE_IDS: &[&str] = &[
    "com.apple.Terminal",
    "com.googlecode.iterm2",
    "dev.warp.Warp-Stable",
    "io.alacritty",
    "com.mitchellh.ghostty",
];

/// Checked in order; the first substring hit wins.
const KNOWN_COMMANDS: &[&str] =
    &["git", "npm", "yarn", "docker", "ssh", "python", "node", "cargo", "make", "brew"];

/// Extracts `path` and `detected_command` from terminal titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPlugin;

impl AppPlugin for TerminalPlugin {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn supported_bundle_ids(&self) -> &'static [&'static str] {
        TERMINAL_BUNDLE_IDS
    }

    fn extract(&self, bundle_id: &str, window_title: Option<&str>) -> Option<PluginContext> {
        if !self.supports(bundle_id) {
            return None;
        }
        let title = window_title?;

        let mut info = BTreeMap::new();
        if let Some(path) = last_segment(title, ':') {
            info.insert("path".to_string(), path);
        }

        let lowered = title.to_lowercase();
        if let Some(command) = KNOWN_COMMANDS.iter().find(|command| lowered.contains(*command)) {
            info.insert("detected_command".to_string(), (*command).to_string());
        }

        Some(PluginContext::with_info(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(title: &str) -> PluginContext {
        TerminalPlugin.extract("com.apple.Terminal", Some(title)).unwrap()
    }

    #[test]
    fn test_path_after_last_colon() {
        let ctx = extract("dev@macbook: ~/src/stepcast");
        assert_eq!(ctx.get("path"), Some("~/src/stepcast"));
    }

    #[test]
    fn test_detected_command_first_match_wins() {
        // "git" is checked before "cargo"
        let ctx = extract("cargo build && git status");
        assert_eq!(ctx.get("detected_command"), Some("git"));
        assert!(ctx.get("path").is_none());
    }

    #[test]
    fn test_command_match_is_case_insensitive() {
        assert_eq!(extract("Docker Desktop").get("detected_command"), Some("docker"));
    }

    #[test]
    fn test_substring_match() {
        // "node" hides inside "nodemon"
        assert_eq!(extract("nodemon").get("detected_command"), Some("node"));
    }

    #[test]
    fn test_plain_title_yields_empty_info() {
        assert!(extract("zsh").info.is_empty());
    }

    #[test]
    fn test_missing_title() {
        assert!(TerminalPlugin.extract("com.googlecode.iterm2", None).is_none());
    }

    #[test]
    fn test_unsupported_bundle_id() {
        assert!(TerminalPlugin.extract("com.apple.Safari", Some("a: b")).is_none());
    }
}
