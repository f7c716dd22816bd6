//! Capture viewport and click normalization

use stepcast_domain::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// Pixel size of the primary screen frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    /// 2560x1600, used when the screen frame is unavailable.
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH, height: DEFAULT_VIEWPORT_HEIGHT }
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Normalize an OS click location (bottom-origin pixels) into
    /// top-origin [0, 1] coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepcast_core::capture::Viewport;
    ///
    /// let viewport = Viewport::new(1000, 500);
    /// assert_eq!(viewport.normalize_click(250.0, 500.0), (0.25, 0.0));
    /// ```
    #[must_use]
    pub fn normalize_click(&self, raw_x: f64, raw_y_from_bottom: f64) -> (f64, f64) {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        (raw_x / width, 1.0 - raw_y_from_bottom / height)
    }

    /// Top-origin pixel point for an element lookup at the same location.
    #[must_use]
    pub fn top_origin_point(&self, raw_x: f64, raw_y_from_bottom: f64) -> (f64, f64) {
        (raw_x, f64::from(self.height) - raw_y_from_bottom)
    }
}
