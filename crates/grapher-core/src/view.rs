// File: crates/grapher-core/src/view.rs
// Summary: Viewport (visible real-coordinate rectangle) and aspect equalization.

use crate::error::GrapherError;
use crate::types::CanvasSize;

/// Real-coordinate rectangle mapped onto the canvas.
///
/// Values are never mutated in place: [`Viewport::equalize_aspect`] and the
/// other helpers return a fresh `Viewport`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Checked constructor; rejects empty, inverted or non-finite ranges.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, GrapherError> {
        let v = Self { x_min, x_max, y_min, y_max };
        v.validate()?;
        Ok(v)
    }

    /// Re-check the invariants on a viewport built with a struct literal.
    pub fn validate(&self) -> Result<(), GrapherError> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max].iter().all(|v| v.is_finite());
        if !finite {
            return Err(GrapherError::NonFiniteViewport {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
            });
        }
        if self.x_min >= self.x_max {
            return Err(GrapherError::DegenerateViewport { axis: 'x', min: self.x_min, max: self.x_max });
        }
        if self.y_min >= self.y_max {
            return Err(GrapherError::DegenerateViewport { axis: 'y', min: self.y_min, max: self.y_max });
        }
        Ok(())
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
    pub fn x_mid(&self) -> f64 { (self.x_max + self.x_min) / 2.0 }
    pub fn y_mid(&self) -> f64 { (self.y_max + self.y_min) / 2.0 }

    /// Real units per device unit along x and y.
    pub fn ratios(&self, canvas: &CanvasSize) -> (f64, f64) {
        (self.x_span() / canvas.width, self.y_span() / canvas.height)
    }

    /// Expand (never shrink) one axis so a real unit covers the same number
    /// of device units horizontally and vertically.
    ///
    /// The axis with the smaller ratio is widened around its midpoint; the
    /// other is returned untouched. Equal ratios take the y branch with a
    /// factor of exactly 1.
    pub fn equalize_aspect(&self, canvas: &CanvasSize) -> Viewport {
        let (x_ratio, y_ratio) = self.ratios(canvas);
        let mut out = *self;
        if x_ratio < y_ratio {
            let mid = self.x_mid();
            let half = self.x_span() / 2.0;
            let factor = y_ratio / x_ratio;
            out.x_min = mid - half * factor;
            out.x_max = mid + half * factor;
        } else {
            let mid = self.y_mid();
            let half = self.y_span() / 2.0;
            let factor = x_ratio / y_ratio;
            out.y_min = mid - half * factor;
            out.y_max = mid + half * factor;
        }
        out
    }

    /// The viewport a draw call should use: equalized when asked, else a copy.
    pub fn effective(&self, canvas: &CanvasSize, equalize: bool) -> Viewport {
        if equalize { self.equalize_aspect(canvas) } else { *self }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x_min: -10.0, x_max: 10.0, y_min: -10.0, y_max: 10.0 }
    }
}
