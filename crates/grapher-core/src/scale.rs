// File: crates/grapher-core/src/scale.rs
// Summary: Forward transform from viewport coordinates to device space.

use crate::types::{CanvasSize, DevicePoint};
use crate::view::Viewport;

/// Map a real point onto the canvas.
///
/// The vertical axis is flipped because device y grows downward. A
/// degenerate viewport is a caller error: the resulting NaN/infinite
/// coordinates are returned as-is, never clamped.
#[inline]
pub fn map_to_device(viewport: &Viewport, canvas: &CanvasSize, x: f64, y: f64) -> DevicePoint {
    let x_perc = (x - viewport.x_min) / (viewport.x_max - viewport.x_min);
    let y_perc = (y - viewport.y_min) / (viewport.y_max - viewport.y_min);
    DevicePoint::new(x_perc * canvas.width, canvas.height - y_perc * canvas.height)
}

/// A viewport bound to a canvas; the mapper the sampler and axes consume.
#[derive(Clone, Copy, Debug)]
pub struct DeviceMapper {
    pub viewport: Viewport,
    pub canvas: CanvasSize,
}

impl DeviceMapper {
    pub fn new(viewport: Viewport, canvas: CanvasSize) -> Self {
        Self { viewport, canvas }
    }

    #[inline]
    pub fn to_device(&self, x: f64, y: f64) -> DevicePoint {
        map_to_device(&self.viewport, &self.canvas, x, y)
    }
}
