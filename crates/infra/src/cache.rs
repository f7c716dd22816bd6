//! Plugin output caching with TTL.
//!
//! The browser plugin walks the accessibility tree, which is the slow path
//! on every click. Output is cached for a few seconds so bursts of actions
//! in one window pay for a single walk.
//!
//! # Cache Strategy
//! - **Key**: bundle id plus window title (a tab switch changes the title)
//! - **Value**: the plugin output, including "nothing found"
//! - **TTL**: `CaptureConfig::plugin_cache_ttl_secs` (5 seconds by default)

use std::time::Duration;

use moka::sync::Cache;
use stepcast_core::PluginRegistry;
use stepcast_domain::constants::PLUGIN_CACHE_TTL_SECS;
use stepcast_domain::PluginContext;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    bundle_id: String,
    window_title: Option<String>,
}

/// Thread-safe plugin output cache with TTL-based eviction.
#[derive(Clone)]
pub struct PluginContextCache {
    cache: Cache<CacheKey, Option<PluginContext>>,
}

impl PluginContextCache {
    /// Create a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { cache: Cache::builder().time_to_live(ttl).max_capacity(256).build() }
    }

    /// Return cached output for the app, running the registry on a miss.
    ///
    /// Generic apps (no plugin) are not cached; the lookup is free.
    pub fn get_or_extract(
        &self,
        registry: &PluginRegistry,
        bundle_id: &str,
        window_title: Option<&str>,
    ) -> Option<PluginContext> {
        registry.plugin_for(bundle_id)?;

        let key =
            CacheKey { bundle_id: bundle_id.to_string(), window_title: window_title.map(str::to_string) };
        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!(bundle_id = %bundle_id, "Plugin cache hit");
            return hit;
        }

        let context = registry.extract(bundle_id, window_title);
        self.cache.insert(key, context.clone());
        context
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Number of live entries.
    ///
    /// Note: This triggers eviction of expired entries.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for PluginContextCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(PLUGIN_CACHE_TTL_SECS))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use stepcast_core::AppPlugin;

    use super::*;

    /// Counts extractions and echoes the title back as the URL.
    #[derive(Default)]
    struct Counting(AtomicUsize);

    impl AppPlugin for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn supported_bundle_ids(&self) -> &'static [&'static str] {
            &["com.example.App"]
        }

        fn extract(&self, _bundle_id: &str, window_title: Option<&str>) -> Option<PluginContext> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Some(PluginContext::with_url(window_title.map(str::to_string)))
        }
    }

    fn registry() -> (PluginRegistry, Arc<Counting>) {
        let plugin = Arc::new(Counting::default());
        (PluginRegistry::new().with_plugin(plugin.clone()), plugin)
    }

    #[test]
    fn test_repeat_lookup_hits_cache() {
        let (registry, plugin) = registry();
        let cache = PluginContextCache::new(Duration::from_secs(60));

        let first = cache.get_or_extract(&registry, "com.example.App", Some("a"));
        let second = cache.get_or_extract(&registry, "com.example.App", Some("a"));

        assert_eq!(first, second);
        assert_eq!(plugin.0.load(Ordering::SeqCst), 1);
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn test_title_change_misses() {
        let (registry, plugin) = registry();
        let cache = PluginContextCache::new(Duration::from_secs(60));

        cache.get_or_extract(&registry, "com.example.App", Some("a"));
        let ctx = cache.get_or_extract(&registry, "com.example.App", Some("b")).unwrap();

        assert_eq!(ctx.url.as_deref(), Some("b"));
        assert_eq!(plugin.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_generic_app_is_not_cached() {
        let (registry, _) = registry();
        let cache = PluginContextCache::default();

        assert!(cache.get_or_extract(&registry, "com.apple.finder", None).is_none());
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn test_clear() {
        let (registry, plugin) = registry();
        let cache = PluginContextCache::new(Duration::from_secs(60));

        cache.get_or_extract(&registry, "com.example.App", None);
        cache.clear();
        assert_eq!(cache.entry_count(), 0);

        cache.get_or_extract(&registry, "com.example.App", None);
        assert_eq!(plugin.0.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_ttl_expiration() {
        let (registry, plugin) = registry();
        let cache = PluginContextCache::new(Duration::from_millis(100));

        cache.get_or_extract(&registry, "com.example.App", None);
        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.get_or_extract(&registry, "com.example.App", None);

        assert_eq!(plugin.0.load(Ordering::SeqCst), 2);
    }
}
