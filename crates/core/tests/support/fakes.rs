//! In-memory implementations of the core ports.

use std::sync::{Arc, Mutex};

use stepcast_core::plugins::ports::{AccessibilityNode, FocusedWindowSource};
use stepcast_core::tracking::ports::ForegroundAppProvider;
use stepcast_domain::{AppContext, Result as DomainResult, StepcastError};

/// Foreground provider whose answer the test can change at any time.
#[derive(Default, Clone)]
pub struct FakeForegroundProvider {
    current: Arc<Mutex<Option<AppContext>>>,
}

impl FakeForegroundProvider {
    /// Provider that reports `bundle_id` / `name` as frontmost.
    pub fn with_app(bundle_id: &str, name: &str) -> Self {
        let provider = Self::default();
        provider.switch_to(bundle_id, name, None);
        provider
    }

    /// Change the frontmost app.
    pub fn switch_to(&self, bundle_id: &str, name: &str, window_title: Option<&str>) {
        *self.current.lock().unwrap() = Some(AppContext {
            bundle_id: Some(bundle_id.to_string()),
            app_name: Some(name.to_string()),
            window_title: window_title.map(str::to_string),
        });
    }

    /// Make every following query fail.
    pub fn fail(&self) {
        *self.current.lock().unwrap() = None;
    }
}

impl ForegroundAppProvider for FakeForegroundProvider {
    fn frontmost_app(&self) -> DomainResult<AppContext> {
        self.current
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StepcastError::Platform("no frontmost application".into()))
    }
}

/// Plain accessibility tree node.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub role: Option<String>,
    pub role_description: Option<String>,
    pub value: Option<String>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(role: &str) -> Self {
        Self { role: Some(role.to_string()), ..Self::default() }
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.role_description = Some(description.to_string());
        self
    }

    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

impl AccessibilityNode for TreeNode {
    fn role(&self) -> Option<String> {
        self.role.clone()
    }

    fn role_description(&self) -> Option<String> {
        self.role_description.clone()
    }

    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn children(&self) -> Vec<Box<dyn AccessibilityNode>> {
        self.children
            .iter()
            .cloned()
            .map(|child| Box::new(child) as Box<dyn AccessibilityNode>)
            .collect()
    }
}

/// Window source serving one fixed window for one bundle id.
#[derive(Clone)]
pub struct FakeWindows {
    bundle_id: String,
    window: TreeNode,
    lookups: Arc<Mutex<usize>>,
}

impl FakeWindows {
    pub fn new(bundle_id: &str, window: TreeNode) -> Self {
        Self { bundle_id: bundle_id.to_string(), window, lookups: Arc::default() }
    }

    /// Number of `focused_window` calls so far.
    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl FocusedWindowSource for FakeWindows {
    fn focused_window(&self, bundle_id: &str) -> Option<Box<dyn AccessibilityNode>> {
        *self.lookups.lock().unwrap() += 1;
        (bundle_id == self.bundle_id).then(|| Box::new(self.window.clone()) as Box<dyn AccessibilityNode>)
    }
}

/// Typical Chrome window: toolbar holding the omnibox.
pub fn chrome_window(url: &str) -> TreeNode {
    TreeNode::new("AXWindow").child(
        TreeNode::new("AXGroup")
            .child(TreeNode::new("AXButton"))
            .child(
                TreeNode::new("AXToolbar")
                    .child(TreeNode::new("AXTextField").described("address and search bar").value(url)),
            ),
    )
}
