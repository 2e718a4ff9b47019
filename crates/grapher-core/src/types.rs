// File: crates/grapher-core/src/types.rs
// Summary: Shared types and constants (canvas size, device points).

use crate::error::GrapherError;

/// Default canvas width in device units.
pub const WIDTH: f64 = 400.0;
/// Default canvas height in device units.
pub const HEIGHT: f64 = 400.0;

/// Size of the rendering surface in device units.
/// Contract: both sides are positive and finite when built through [`CanvasSize::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Result<Self, GrapherError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(width) || !ok(height) {
            return Err(GrapherError::InvalidCanvasSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Integer pixel dimensions for raster backends (rounded up, at least 1).
    pub fn pixels(&self) -> (i32, i32) {
        let px = |v: f64| (v.ceil() as i32).max(1);
        (px(self.width), px(self.height))
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// A point in device space: origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
