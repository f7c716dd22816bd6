//! macOS Accessibility API Integration
//!
//! Thin ownership wrapper over `AXUIElementRef` plus the permission check.
//! Every query degrades to `None` when the attribute is missing, the call
//! fails, or Accessibility permission has not been granted.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use core_foundation::array::CFArray;
use core_foundation::base::{CFType, CFTypeID, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::{CFString, CFStringRef};
use parking_lot::RwLock;
use stepcast_domain::Result as DomainResult;

#[repr(C)]
struct __AXUIElement(std::ffi::c_void);
type AXUIElementRef = *const __AXUIElement;

extern "C" {
    fn AXIsProcessTrustedWithOptions(options: CFTypeRef) -> bool;
    fn AXUIElementCreateApplication(pid: i32) -> AXUIElementRef;
    fn AXUIElementCreateSystemWide() -> AXUIElementRef;
    fn AXUIElementGetTypeID() -> CFTypeID;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> i32;
    fn AXUIElementCopyElementAtPosition(
        application: AXUIElementRef,
        x: f32,
        y: f32,
        element: *mut AXUIElementRef,
    ) -> i32;
    fn CFRetain(cf: CFTypeRef) -> CFTypeRef;
    fn CFRelease(cf: CFTypeRef);
}

// AX Error codes
const K_AX_ERROR_SUCCESS: i32 = 0;

const AX_PERMISSION_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Copy)]
struct CachedPermission {
    value: bool,
    checked_at: Instant,
}

// Cached with a TTL so a grant in System Settings is picked up eventually
static AX_PERMISSION_CACHE: OnceLock<RwLock<Option<CachedPermission>>> = OnceLock::new();

fn permission_cache() -> &'static RwLock<Option<CachedPermission>> {
    AX_PERMISSION_CACHE.get_or_init(|| RwLock::new(None))
}

/// Check if Accessibility permission is granted.
///
/// Uses `AXIsProcessTrustedWithOptions`. The answer is cached for five
/// minutes unless `prompt` is set, in which case the system dialog may be
/// shown and the cache is refreshed.
///
/// # Errors
/// Never on macOS; the signature matches the non-macOS fallback.
pub fn check_ax_permission(prompt: bool) -> DomainResult<bool> {
    if !prompt {
        let cached = permission_cache().read();
        if let Some(entry) = *cached {
            if entry.checked_at.elapsed() < AX_PERMISSION_CACHE_TTL {
                return Ok(entry.value);
            }
        }
    }

    // SAFETY: AXIsProcessTrustedWithOptions reads a valid CFDictionary and
    // does not retain it after returning.
    let is_trusted = unsafe {
        let prompt_key = CFString::from_static_string("AXTrustedCheckOptionPrompt");
        let prompt_value = CFBoolean::from(prompt);

        let options =
            CFDictionary::from_CFType_pairs(&[(prompt_key.as_CFType(), prompt_value.as_CFType())]);

        AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef().cast())
    };

    *permission_cache().write() = Some(CachedPermission { value: is_trusted, checked_at: Instant::now() });

    if is_trusted {
        tracing::info!("Accessibility permission granted");
    } else {
        tracing::warn!("Accessibility permission denied - element lookups disabled");
    }

    Ok(is_trusted)
}

/// Owned accessibility element; released on drop.
pub struct AxElement(AXUIElementRef);

// SAFETY: AXUIElementRef is an immutable CoreFoundation object; retain and
// release are thread-safe and AX queries may be issued from any thread.
unsafe impl Send for AxElement {}
unsafe impl Sync for AxElement {}

impl AxElement {
    /// Take ownership of a +1 reference.
    ///
    /// # Safety
    /// `raw` must be null or a valid AXUIElementRef the caller owns.
    unsafe fn from_create_rule(raw: AXUIElementRef) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Retain a borrowed reference.
    ///
    /// # Safety
    /// `raw` must be null or a valid AXUIElementRef.
    unsafe fn from_get_rule(raw: AXUIElementRef) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        CFRetain(raw.cast());
        Some(Self(raw))
    }

    fn from_cf(value: &CFType) -> Option<Self> {
        // SAFETY: type id comparison is a read-only CF call.
        if value.type_of() != unsafe { AXUIElementGetTypeID() } {
            return None;
        }
        // SAFETY: the value was just checked to be an AXUIElement; `value`
        // keeps its own reference, so ours is retained separately.
        unsafe { Self::from_get_rule(value.as_CFTypeRef().cast()) }
    }

    /// Application element for a process.
    pub fn application(pid: i32) -> Option<Self> {
        // SAFETY: returns a +1 reference or null.
        unsafe { Self::from_create_rule(AXUIElementCreateApplication(pid)) }
    }

    /// System-wide element used for hit-testing.
    pub fn system_wide() -> Option<Self> {
        // SAFETY: returns a +1 reference or null.
        unsafe { Self::from_create_rule(AXUIElementCreateSystemWide()) }
    }

    fn copy_attribute(&self, attribute: &'static str) -> Option<CFType> {
        let name = CFString::from_static_string(attribute);
        let mut value: CFTypeRef = std::ptr::null();

        // SAFETY: self.0 is a live element; on success `value` is a +1
        // reference that CFType takes ownership of.
        unsafe {
            let status =
                AXUIElementCopyAttributeValue(self.0, name.as_concrete_TypeRef(), &mut value);
            if status != K_AX_ERROR_SUCCESS || value.is_null() {
                return None;
            }
            Some(CFType::wrap_under_create_rule(value))
        }
    }

    /// String attribute, `None` when absent or not a string.
    pub fn string_attribute(&self, attribute: &'static str) -> Option<String> {
        self.copy_attribute(attribute)?.downcast_into::<CFString>().map(|s| s.to_string())
    }

    /// Element-valued attribute such as `AXParent` or `AXFocusedWindow`.
    pub fn element_attribute(&self, attribute: &'static str) -> Option<Self> {
        Self::from_cf(&self.copy_attribute(attribute)?)
    }

    /// `AXChildren`, empty when unavailable.
    pub fn children(&self) -> Vec<Self> {
        self.copy_attribute("AXChildren")
            .and_then(|value| value.downcast_into::<CFArray<CFType>>())
            .map(|array| array.iter().filter_map(|child| Self::from_cf(&child)).collect())
            .unwrap_or_default()
    }

    /// Deepest element under a top-left-origin screen point.
    pub fn element_at_position(&self, x: f64, y: f64) -> Option<Self> {
        let mut element: AXUIElementRef = std::ptr::null();

        // SAFETY: self.0 is live; on success `element` is a +1 reference.
        #[allow(clippy::cast_possible_truncation)]
        unsafe {
            let status = AXUIElementCopyElementAtPosition(self.0, x as f32, y as f32, &mut element);
            if status != K_AX_ERROR_SUCCESS {
                return None;
            }
            Self::from_create_rule(element)
        }
    }
}

impl Drop for AxElement {
    fn drop(&mut self) {
        // SAFETY: self.0 is non-null and owned by this wrapper.
        unsafe { CFRelease(self.0.cast()) }
    }
}

/// Focused window of a process, if permission allows.
pub fn focused_window(app_pid: i32) -> Option<AxElement> {
    if !check_ax_permission(false).unwrap_or(false) {
        tracing::trace!(pid = app_pid, "Skipping focused window lookup without permission");
        return None;
    }

    let window = AxElement::application(app_pid)?.element_attribute("AXFocusedWindow");
    if window.is_none() {
        tracing::trace!(pid = app_pid, "No focused window for PID");
    }
    window
}

/// Title of the focused window; empty titles count as absent.
pub fn focused_window_title(app_pid: i32) -> Option<String> {
    focused_window(app_pid)?.string_attribute("AXTitle").filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ax_permission_cache() {
        let first = check_ax_permission(false).unwrap();
        let second = check_ax_permission(false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_pid_has_no_window_title() {
        assert!(focused_window_title(-1).is_none());
    }

    #[test]
    fn test_system_wide_element_exists() {
        assert!(AxElement::system_wide().is_some());
    }
}
