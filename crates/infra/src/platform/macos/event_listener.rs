//! App activation listener using NSWorkspace notifications
//!
//! Fires once per `NSWorkspaceDidActivateApplicationNotification` with the
//! app that notification is about, so the recorder can emit `appSwitch`
//! actions without polling. Reading the app from `userInfo` rather than
//! asking for the frontmost one keeps A→B→C distinct when notifications
//! queue up behind a slow callback.
//!
//! # Memory Management
//! All Objective-C resources are owned via `Retained<T>`. Teardown order:
//! 1. Remove observer (stops callbacks)
//! 2. Drop block (safe now, NC no longer references it)
//! 3. Drop queue (can finish in-flight operations)

use std::ptr::NonNull;
use std::sync::Arc;
use std::time::Instant;

use block2::RcBlock;
use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObjectProtocol, ProtocolObject};
use objc2_app_kit::{NSRunningApplication, NSWorkspace, NSWorkspaceApplicationKey};
use objc2_foundation::{NSNotification, NSNotificationCenter, NSOperationQueue, NSString};
use stepcast_domain::{AppContext, Result as DomainResult};

use super::error_helpers::observer_error;
use crate::platform::{ActivationCallback, AppActivationListener};

type ObserverToken = Retained<ProtocolObject<dyn NSObjectProtocol>>;
type NotificationBlock = RcBlock<dyn Fn(NonNull<NSNotification>)>;

const DID_ACTIVATE_APPLICATION: &str = "NSWorkspaceDidActivateApplicationNotification";

/// NSWorkspace-backed [`AppActivationListener`].
#[derive(Default)]
pub struct MacOsActivationListener {
    nc: Option<Retained<NSNotificationCenter>>,
    observer_token: Option<ObserverToken>,
    queue: Option<Retained<NSOperationQueue>>,
    // Keeps the block alive while the notification center references it
    block_keepalive: Option<NotificationBlock>,
}

impl MacOsActivationListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an observer is currently registered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.observer_token.is_some()
    }

    fn teardown(&mut self) {
        if let Some(token) = self.observer_token.take() {
            if let Some(nc) = &self.nc {
                // SAFETY: ProtocolObject<P> is repr(transparent) over
                // AnyObject; removeObserver only needs the object identity.
                unsafe {
                    let observer_ref =
                        std::mem::transmute::<&ProtocolObject<dyn NSObjectProtocol>, &AnyObject>(
                            &*token,
                        );
                    nc.removeObserver(observer_ref);
                }
                tracing::debug!("NSWorkspace activation observer removed");
            }
        }

        self.block_keepalive = None;
        self.queue = None;
        self.nc = None;
    }
}

// SAFETY: the Objective-C objects are only touched through Retained<T>,
// NSNotificationCenter observer registration is thread-safe, and every
// mutation goes through &mut self.
unsafe impl Send for MacOsActivationListener {}
unsafe impl Sync for MacOsActivationListener {}

impl Drop for MacOsActivationListener {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn app_context(app: &NSRunningApplication) -> AppContext {
    AppContext {
        bundle_id: app.bundleIdentifier().map(|id| id.to_string()),
        app_name: app.localizedName().map(|name| name.to_string()),
        window_title: None,
    }
}

/// The `NSRunningApplication` carried under `NSWorkspaceApplicationKey`.
fn notified_app(note: &NSNotification) -> Option<Retained<NSRunningApplication>> {
    let user_info = note.userInfo()?;
    // SAFETY: NSWorkspaceApplicationKey is an immutable AppKit constant.
    let key = unsafe { NSWorkspaceApplicationKey };
    let object = user_info.objectForKey(key)?;
    object.downcast::<NSRunningApplication>().ok()
}

/// App named by the notification, else whatever is frontmost now.
fn activated_context(note: &NSNotification) -> Option<AppContext> {
    if let Some(app) = notified_app(note) {
        return Some(app_context(&app));
    }
    tracing::debug!("Activation notification without an application; using frontmost app");
    NSWorkspace::sharedWorkspace().frontmostApplication().map(|app| app_context(&app))
}

impl AppActivationListener for MacOsActivationListener {
    fn start(&mut self, callback: ActivationCallback) -> DomainResult<()> {
        if self.observer_token.is_some() {
            tracing::warn!("Activation observer already started");
            return Err(observer_error("already started"));
        }

        let start_time = Instant::now();
        let callback = Arc::new(callback);

        let block = RcBlock::new(move |note: NonNull<NSNotification>| {
            // SAFETY: the notification center passes a valid notification
            // that outlives the block invocation.
            let note = unsafe { note.as_ref() };
            let Some(context) = activated_context(note) else {
                tracing::debug!("Activation notification without an app");
                return;
            };
            // Panics must not unwind into Objective-C
            if std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| (callback)(context)))
                .is_err()
            {
                tracing::error!("App activation callback panicked");
            }
        });

        let workspace = NSWorkspace::sharedWorkspace();
        let nc = workspace.notificationCenter();

        // Serial queue keeps callbacks in activation order
        let queue = NSOperationQueue::new();
        queue.setMaxConcurrentOperationCount(1);

        let name = NSString::from_str(DID_ACTIVATE_APPLICATION);

        // SAFETY: the block and queue are kept alive in self until the
        // observer is removed in teardown().
        let token = unsafe {
            nc.addObserverForName_object_queue_usingBlock(Some(&name), None, Some(&queue), &block)
        };

        self.nc = Some(nc);
        self.observer_token = Some(token);
        self.queue = Some(queue);
        self.block_keepalive = Some(block);

        tracing::info!(
            duration_ms = start_time.elapsed().as_millis() as u64,
            "NSWorkspace activation observer registered"
        );
        Ok(())
    }

    fn stop(&mut self) -> DomainResult<()> {
        self.teardown();
        Ok(())
    }

    fn is_supported() -> bool {
        true
    }
}
