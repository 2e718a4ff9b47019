// File: crates/grapher-core/src/style.rs
// Summary: Presentation attributes attached to a drawn primitive.

use crate::error::GrapherError;

/// Stroke/fill presentation of a primitive. Colours are CSS strings and are
/// interpreted by the surface. An empty `fill` means no fill.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
}

impl Style {
    /// Checked constructor: the stroke colour must not be empty.
    pub fn new(stroke: impl Into<String>, fill: impl Into<String>, stroke_width: f64) -> Result<Self, GrapherError> {
        let style = Self { stroke: stroke.into(), fill: fill.into(), stroke_width };
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), GrapherError> {
        if self.stroke.trim().is_empty() {
            return Err(GrapherError::EmptyColor);
        }
        Ok(())
    }

    /// Faint style used for axes and ticks.
    pub fn light() -> Self {
        Self { stroke: "#ddd".into(), fill: "transparent".into(), stroke_width: 1.5 }
    }

    /// Default curve style.
    pub fn dark() -> Self {
        Self { stroke: "#666".into(), fill: "transparent".into(), stroke_width: 3.0 }
    }

    /// Unfilled stroke in `color`, as used for function curves.
    pub fn curve(color: impl Into<String>, stroke_width: f64) -> Result<Self, GrapherError> {
        Self::new(color, "transparent", stroke_width)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::dark()
    }
}
