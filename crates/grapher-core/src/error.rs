// File: crates/grapher-core/src/error.rs
// Summary: Error type for configuration and surface failures.

use thiserror::Error;

/// Errors raised at construction or draw time.
///
/// Numeric trouble coming out of a plotted function (NaN, infinities, huge
/// slopes) is never reported here; it flows through as device geometry.
#[derive(Debug, Error)]
pub enum GrapherError {
    #[error("degenerate viewport: {axis} range [{min}, {max}] is empty")]
    DegenerateViewport { axis: char, min: f64, max: f64 },

    #[error("viewport bounds must be finite (got x: [{x_min}, {x_max}], y: [{y_min}, {y_max}])")]
    NonFiniteViewport { x_min: f64, x_max: f64, y_min: f64, y_max: f64 },

    #[error("invalid canvas size {width}x{height}: both sides must be positive and finite")]
    InvalidCanvasSize { width: f64, height: f64 },

    #[error("style color must not be empty")]
    EmptyColor,

    #[error("unsupported color '{0}'")]
    InvalidColor(String),

    #[error("sampler needs at least 2 grid points, got {0}")]
    TooFewSamples(usize),

    #[error("render surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
