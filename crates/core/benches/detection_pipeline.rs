use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepcast_core::detection::generate_caption;
use stepcast_core::{AccessibilityNode, ActionBuffer, FocusedWindowSource, PluginRegistry, StepDetector};
use stepcast_domain::{ActionKind, DetectionConfig, ElementDescriptor, RawAction};

#[allow(clippy::cast_precision_loss)]
fn sample_actions() -> Vec<RawAction> {
    let kinds = [
        ActionKind::Click,
        ActionKind::KeyboardShortcut,
        ActionKind::Scroll,
        ActionKind::AppSwitch,
        ActionKind::Type,
    ];
    (0..200)
        .map(|idx| {
            let kind = kinds[idx % kinds.len()];
            let action = RawAction::new(idx as f64 * 0.2, kind)
                .with_viewport(2560, 1600)
                .with_bundle_id("com.apple.Safari")
                .with_app_name("Safari");
            match kind {
                ActionKind::Click => action
                    .with_click(0.4, 0.6)
                    .with_element(ElementDescriptor::new("AXButton").with_title("Continue")),
                ActionKind::KeyboardShortcut => action.with_key_combo("Cmd+S"),
                ActionKind::Type => action.with_typed_text("the quick brown fox jumps over the lazy dog"),
                _ => action,
            }
        })
        .collect()
}

#[derive(Clone)]
struct Node {
    role: &'static str,
    value: Option<&'static str>,
    children: Vec<Node>,
}

impl AccessibilityNode for Node {
    fn role(&self) -> Option<String> {
        Some(self.role.to_string())
    }

    fn role_description(&self) -> Option<String> {
        None
    }

    fn value(&self) -> Option<String> {
        self.value.map(str::to_string)
    }

    fn children(&self) -> Vec<Box<dyn AccessibilityNode>> {
        self.children.iter().cloned().map(|c| Box::new(c) as Box<dyn AccessibilityNode>).collect()
    }
}

struct WideWindow(Node);

impl FocusedWindowSource for WideWindow {
    fn focused_window(&self, _bundle_id: &str) -> Option<Box<dyn AccessibilityNode>> {
        Some(Box::new(self.0.clone()))
    }
}

/// Toolbar buried after many empty groups, like a real browser window.
fn wide_window() -> Node {
    let label = Node { role: "AXStaticText", value: Some("label"), children: vec![] };
    let filler = Node { role: "AXGroup", value: None, children: vec![label; 4] };
    let bar = Node { role: "AXTextField", value: Some("https://example.com/docs"), children: vec![] };
    let mut toolbar = vec![filler; 30];
    toolbar.push(Node { role: "AXToolbar", value: None, children: vec![bar] });
    Node { role: "AXWindow", value: None, children: toolbar }
}

fn detection_benchmark(c: &mut Criterion) {
    let actions = sample_actions();

    let mut group = c.benchmark_group("detection_pipeline");

    group.bench_function("buffer_submit_200", |b| {
        b.iter(|| {
            let buffer = ActionBuffer::new(StepDetector::with_config(DetectionConfig::default()));
            for action in &actions {
                buffer.submit(black_box(action.clone()));
            }
            black_box(buffer.current_step_count())
        });
    });

    group.bench_function("generate_caption", |b| {
        b.iter(|| {
            for action in &actions {
                black_box(generate_caption(black_box(action)));
            }
        });
    });

    group.bench_function("browser_tree_search", |b| {
        let registry = PluginRegistry::with_defaults(Arc::new(WideWindow(wide_window())));
        b.iter(|| black_box(registry.extract(black_box("com.google.Chrome"), Some("Docs"))));
    });

    group.finish();
}

criterion_group!(core_benchmarks, detection_benchmark);
criterion_main!(core_benchmarks);
