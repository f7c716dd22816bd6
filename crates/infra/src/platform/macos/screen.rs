//! Primary display frame

use core_graphics::display::CGDisplay;
use stepcast_core::Viewport;

/// Main display size in points, `None` if CoreGraphics reports an empty
/// frame.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn main_display_viewport() -> Option<Viewport> {
    let bounds = CGDisplay::main().bounds();
    let (width, height) = (bounds.size.width, bounds.size.height);
    if width < 1.0 || height < 1.0 {
        tracing::warn!(width, height, "Main display reported an empty frame");
        return None;
    }
    Some(Viewport::new(width.round() as u32, height.round() as u32))
}
