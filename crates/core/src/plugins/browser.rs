//! Browser plugin - reads the address bar through the accessibility tree
//!
//! Supported browsers:
//! - Google Chrome, Safari, Firefox
//! - Microsoft Edge, Arc, Brave
//!
//! The search is depth-first over the focused window:
//! 1. A text field or combo box whose value looks like a URL wins
//! 2. Otherwise a node whose role description mentions "url" or "address"
//!    wins with whatever value it has
//! 3. Otherwise recurse into children, bounded by `max_depth`

use std::collections::BTreeMap;
use std::sync::Arc;

use stepcast_domain::constants::ACCESSIBILITY_MAX_DEPTH;
use stepcast_domain::PluginContext;
use tracing::trace;
use url::Url;

use super::ports::{AccessibilityNode, FocusedWindowSource};
use super::AppPlugin;

const BROWSER_BUNDLE_IDS: &[&str] = &[
    "com.google.Chrome",
    "com.apple.Safari",
    "org.mozilla.firefox",
    "com.microsoft.edgemac",
    "company.thebrowser.Browser", // Arc
    "com.brave.Browser",
];

const URL_FIELD_ROLES: &[&str] = &["AXTextField", "AXComboBox"];

const URL_MARKERS: &[&str] = &["://", "www.", ".com", ".org", "localhost"];

/// Extracts the current URL from browsers.
pub struct BrowserPlugin {
    windows: Arc<dyn FocusedWindowSource>,
    max_depth: usize,
}

impl BrowserPlugin {
    /// Plugin searching at most [`ACCESSIBILITY_MAX_DEPTH`] levels deep.
    pub fn new(windows: Arc<dyn FocusedWindowSource>) -> Self {
        Self::with_max_depth(windows, ACCESSIBILITY_MAX_DEPTH)
    }

    /// Plugin with a custom depth bound.
    pub fn with_max_depth(windows: Arc<dyn FocusedWindowSource>, max_depth: usize) -> Self {
        Self { windows, max_depth }
    }

    fn find_url_field(&self, node: &dyn AccessibilityNode, depth: usize) -> Option<String> {
        if depth >= self.max_depth {
            return None;
        }

        let is_field = node.role().is_some_and(|role| URL_FIELD_ROLES.contains(&role.as_str()));
        if is_field {
            if let Some(value) = node.value().filter(|value| looks_like_url(value)) {
                return Some(value);
            }
        }

        let described_as_url = node.role_description().is_some_and(|description| {
            let description = description.to_lowercase();
            description.contains("url") || description.contains("address")
        });
        if described_as_url {
            if let Some(value) = node.value() {
                return Some(value);
            }
        }

        node.children().iter().find_map(|child| self.find_url_field(child.as_ref(), depth + 1))
    }
}

impl AppPlugin for BrowserPlugin {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn supported_bundle_ids(&self) -> &'static [&'static str] {
        BROWSER_BUNDLE_IDS
    }

    fn extract(&self, bundle_id: &str, _window_title: Option<&str>) -> Option<PluginContext> {
        if !self.supports(bundle_id) {
            return None;
        }

        let url = self
            .windows
            .focused_window(bundle_id)
            .and_then(|window| self.find_url_field(window.as_ref(), 0));

        let mut info = BTreeMap::new();
        if let Some(host) = url.as_deref().and_then(url_host) {
            info.insert("host".to_string(), host);
        }
        trace!(bundle_id = %bundle_id, url = ?url, "Browser address bar lookup");

        Some(PluginContext { url, info })
    }
}

/// Heuristic used on address-bar values: contains `://`, `www.`, `.com`,
/// `.org` or `localhost`.
#[must_use]
pub fn looks_like_url(value: &str) -> bool {
    URL_MARKERS.iter().any(|marker| value.contains(marker))
}

/// Host part of an address-bar value. Bare values like `example.com/x` are
/// parsed as `https`.
fn url_host(value: &str) -> Option<String> {
    let parsed = if value.contains("://") {
        Url::parse(value)
    } else {
        Url::parse(&format!("https://{value}"))
    };
    parsed.ok().and_then(|url| url.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Node {
        role: Option<&'static str>,
        description: Option<&'static str>,
        value: Option<&'static str>,
        children: Vec<Node>,
    }

    impl AccessibilityNode for Node {
        fn role(&self) -> Option<String> {
            self.role.map(str::to_string)
        }

        fn role_description(&self) -> Option<String> {
            self.description.map(str::to_string)
        }

        fn value(&self) -> Option<String> {
            self.value.map(str::to_string)
        }

        fn children(&self) -> Vec<Box<dyn AccessibilityNode>> {
            self.children.iter().cloned().map(|c| Box::new(c) as Box<dyn AccessibilityNode>).collect()
        }
    }

    struct OneWindow(Node);

    impl FocusedWindowSource for OneWindow {
        fn focused_window(&self, _bundle_id: &str) -> Option<Box<dyn AccessibilityNode>> {
            Some(Box::new(self.0.clone()))
        }
    }

    fn plugin(root: Node) -> BrowserPlugin {
        BrowserPlugin::new(Arc::new(OneWindow(root)))
    }

    fn group(children: Vec<Node>) -> Node {
        Node { role: Some("AXGroup"), children, ..Node::default() }
    }

    #[test]
    fn test_looks_like_url() {
        assert!(looks_like_url("https://github.com"));
        assert!(looks_like_url("www.rust-lang.org"));
        assert!(looks_like_url("localhost:3000"));
        assert!(looks_like_url("docs.example.com/page"));
        assert!(!looks_like_url("search terms"));
    }

    #[test]
    fn test_finds_nested_text_field() {
        let field = Node {
            role: Some("AXTextField"),
            value: Some("https://github.com/rust-lang/rust"),
            ..Node::default()
        };
        let root = group(vec![group(vec![]), group(vec![field])]);

        let ctx = plugin(root).extract("com.google.Chrome", Some("GitHub")).unwrap();
        assert_eq!(ctx.url.as_deref(), Some("https://github.com/rust-lang/rust"));
        assert_eq!(ctx.get("host"), Some("github.com"));
    }

    #[test]
    fn test_text_field_without_url_is_skipped() {
        let search = Node { role: Some("AXTextField"), value: Some("find in page"), ..Node::default() };
        let bar = Node { role: Some("AXComboBox"), value: Some("example.org/docs"), ..Node::default() };
        let ctx = plugin(group(vec![search, bar])).extract("com.apple.Safari", None).unwrap();
        assert_eq!(ctx.url.as_deref(), Some("example.org/docs"));
        assert_eq!(ctx.get("host"), Some("example.org"));
    }

    #[test]
    fn test_role_description_match_accepts_any_value() {
        let bar = Node {
            role: Some("AXUnknown"),
            description: Some("Address and search bar"),
            value: Some("about:blank"),
            ..Node::default()
        };
        let ctx = plugin(group(vec![bar])).extract("com.brave.Browser", None).unwrap();
        assert_eq!(ctx.url.as_deref(), Some("about:blank"));
        assert!(ctx.get("host").is_none());
    }

    #[test]
    fn test_depth_bound() {
        let field =
            Node { role: Some("AXTextField"), value: Some("https://deep.example.com"), ..Node::default() };
        // Field sits at depth 10: root is 0
        let mut node = field;
        for _ in 0..10 {
            node = group(vec![node]);
        }
        let ctx = plugin(node.clone()).extract("com.apple.Safari", None).unwrap();
        assert!(ctx.url.is_none());

        let shallow = BrowserPlugin::with_max_depth(Arc::new(OneWindow(node)), 11);
        let ctx = shallow.extract("com.apple.Safari", None).unwrap();
        assert_eq!(ctx.url.as_deref(), Some("https://deep.example.com"));
    }

    #[test]
    fn test_unsupported_bundle_id() {
        assert!(plugin(group(vec![])).extract("com.apple.Terminal", None).is_none());
    }

    #[test]
    fn test_no_url_found_still_returns_context() {
        let ctx = plugin(group(vec![])).extract("org.mozilla.firefox", None).unwrap();
        assert_eq!(ctx, PluginContext::default());
    }
}
