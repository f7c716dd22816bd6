//! App plugins - app-specific context extraction
//!
//! Given a foreground bundle id and window title, at most one plugin applies
//! and returns a [`PluginContext`] (URL, file, branch, ...). Output is
//! advisory enrichment and never gates step acceptance.
//!
//! ```text
//! PluginRegistry::extract(bundle_id, title)
//!     ├─► BrowserPlugin  ──► FocusedWindowSource (AX tree walk)
//!     ├─► TerminalPlugin ──► window title
//!     ├─► VsCodePlugin   ──► window title
//!     └─► FigmaPlugin    ──► window title
//! ```

pub mod browser;
pub mod figma;
pub mod ports;
pub mod terminal;
pub mod vscode;

use std::sync::Arc;

pub use browser::BrowserPlugin;
pub use figma::FigmaPlugin;
use stepcast_domain::constants::ACCESSIBILITY_MAX_DEPTH;
use stepcast_domain::PluginContext;
pub use terminal::TerminalPlugin;
use tracing::trace;
pub use vscode::VsCodePlugin;

use self::ports::FocusedWindowSource;

/// App-specific context extractor.
pub trait AppPlugin: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Bundle identifiers this plugin handles
    fn supported_bundle_ids(&self) -> &'static [&'static str];

    /// Whether this plugin handles `bundle_id`
    fn supports(&self, bundle_id: &str) -> bool {
        self.supported_bundle_ids().contains(&bundle_id)
    }

    /// Extract context for the app, or `None` if the plugin does not apply
    /// or has nothing to work with.
    fn extract(&self, bundle_id: &str, window_title: Option<&str>) -> Option<PluginContext>;
}

/// Ordered set of plugins; the first one supporting a bundle id wins.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn AppPlugin>>,
}

impl PluginRegistry {
    /// Empty registry; every lookup is "generic".
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Browser, Terminal, VS Code and Figma, in that order.
    #[must_use]
    pub fn with_defaults(windows: Arc<dyn FocusedWindowSource>) -> Self {
        Self::with_defaults_and_depth(windows, ACCESSIBILITY_MAX_DEPTH)
    }

    /// Like [`with_defaults`](Self::with_defaults) with a custom browser tree
    /// depth bound.
    #[must_use]
    pub fn with_defaults_and_depth(windows: Arc<dyn FocusedWindowSource>, max_depth: usize) -> Self {
        Self::new()
            .with_plugin(Arc::new(BrowserPlugin::with_max_depth(windows, max_depth)))
            .with_plugin(Arc::new(TerminalPlugin))
            .with_plugin(Arc::new(VsCodePlugin))
            .with_plugin(Arc::new(FigmaPlugin))
    }

    /// Append a plugin (lowest priority so far).
    #[must_use]
    pub fn with_plugin(mut self, plugin: Arc<dyn AppPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// True when no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// The plugin that would handle `bundle_id`, if any.
    #[must_use]
    pub fn plugin_for(&self, bundle_id: &str) -> Option<&Arc<dyn AppPlugin>> {
        self.plugins.iter().find(|plugin| plugin.supports(bundle_id))
    }

    /// Run the first supporting plugin. `None` means generic app or no context.
    #[must_use]
    pub fn extract(&self, bundle_id: &str, window_title: Option<&str>) -> Option<PluginContext> {
        let plugin = self.plugin_for(bundle_id)?;
        let context = plugin.extract(bundle_id, window_title);
        trace!(
            plugin = plugin.name(),
            bundle_id = %bundle_id,
            found = context.is_some(),
            "Plugin extraction finished"
        );
        context
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.plugins.iter().map(|plugin| plugin.name()).collect();
        f.debug_struct("PluginRegistry").field("plugins", &names).finish()
    }
}
