//! Figma plugin - file and page from the window title
//!
//! Titles: `File Name - Figma` or `Page - File Name - Figma`.

use std::collections::BTreeMap;

use stepcast_domain::utils::split_segments;
use stepcast_domain::PluginContext;

use super::AppPlugin;

const FIGMA_BUNDLE_IDS: &[&str] = &["com.figma.Desktop"];

/// Extracts `figma_file` and `figma_page`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigmaPlugin;

impl AppPlugin for FigmaPlugin {
    fn name(&self) -> &'static str {
        "figma"
    }

    fn supported_bundle_ids(&self) -> &'static [&'static str] {
        FIGMA_BUNDLE_IDS
    }

    fn extract(&self, bundle_id: &str, window_title: Option<&str>) -> Option<PluginContext> {
        if !self.supports(bundle_id) {
            return None;
        }
        let parts = split_segments(window_title?, " - ");

        let mut info = BTreeMap::new();
        match parts.as_slice() {
            [page, file, _, ..] => {
                info.insert("figma_page".to_string(), page.clone());
                info.insert("figma_file".to_string(), file.clone());
            }
            [file, _] => {
                info.insert("figma_file".to_string(), file.clone());
            }
            _ => {}
        }

        Some(PluginContext::with_info(info))
    }
}
