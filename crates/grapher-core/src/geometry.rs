// File: crates/grapher-core/src/geometry.rs
// Summary: Lightweight geometry helpers for device-space segments.

use crate::types::DevicePoint;

/// Straight line between two device points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DevicePoint,
    pub to: DevicePoint,
}

/// Direction a tick is drawn in, relative to the device axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Segment {
    pub const fn new(from: DevicePoint, to: DevicePoint) -> Self {
        Self { from, to }
    }

    /// Segment of length `2 * half_len` centred on `center`.
    pub fn centered(center: DevicePoint, orientation: Orientation, half_len: f64) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(
                DevicePoint::new(center.x, center.y - half_len),
                DevicePoint::new(center.x, center.y + half_len),
            ),
            Orientation::Horizontal => Self::new(
                DevicePoint::new(center.x - half_len, center.y),
                DevicePoint::new(center.x + half_len, center.y),
            ),
        }
    }

    pub fn midpoint(&self) -> DevicePoint {
        DevicePoint::new((self.from.x + self.to.x) * 0.5, (self.from.y + self.to.y) * 0.5)
    }

    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// True when `v` lies in the half-open device extent `[0, extent)`.
#[inline]
pub fn within_extent(v: f64, extent: f64) -> bool {
    0.0 <= v && v < extent
}
