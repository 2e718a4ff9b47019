// File: crates/grapher-core/src/axis.rs
// Summary: Axis baselines and integer tick marks, computed in device space.

use tracing::debug;

use crate::geometry::{within_extent, Orientation, Segment};
use crate::scale::DeviceMapper;
use crate::style::Style;

/// Default tick half-length in device units.
pub const TICK_HALF_LEN: f64 = 3.0;

/// Upper bound on ticks per axis. A range holding more integers than this
/// gets no ticks at all.
pub const MAX_TICKS: u64 = 1 << 16;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub tick_half_len: f64,
    pub style: Style,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self { tick_half_len: TICK_HALF_LEN, style: Style::light() }
    }
}

/// The `y = 0` baseline, if it falls inside `[0, height)` in device space.
pub fn x_axis_segment(mapper: &DeviceMapper) -> Option<Segment> {
    let v = &mapper.viewport;
    let left = mapper.to_device(v.x_min, 0.0);
    let right = mapper.to_device(v.x_max, 0.0);
    within_extent(left.y, mapper.canvas.height).then(|| Segment::new(left, right))
}

/// The `x = 0` baseline, if it falls inside `[0, width)` in device space.
pub fn y_axis_segment(mapper: &DeviceMapper) -> Option<Segment> {
    let v = &mapper.viewport;
    let bottom = mapper.to_device(0.0, v.y_min);
    let top = mapper.to_device(0.0, v.y_max);
    within_extent(bottom.x, mapper.canvas.width).then(|| Segment::new(bottom, top))
}

/// Vertical ticks at every integer x in view. Empty when the x-axis is hidden
/// or the range holds more than [`MAX_TICKS`] integers.
pub fn x_axis_ticks(mapper: &DeviceMapper, half_len: f64) -> Vec<Segment> {
    if x_axis_segment(mapper).is_none() {
        return Vec::new();
    }
    let v = &mapper.viewport;
    integers_in(v.x_min, v.x_max)
        .into_iter()
        .flatten()
        .map(|x| Segment::centered(mapper.to_device(x, 0.0), Orientation::Vertical, half_len))
        .collect()
}

/// Horizontal ticks at every integer y in view. Empty when the y-axis is hidden
/// or the range holds more than [`MAX_TICKS`] integers.
pub fn y_axis_ticks(mapper: &DeviceMapper, half_len: f64) -> Vec<Segment> {
    if y_axis_segment(mapper).is_none() {
        return Vec::new();
    }
    let v = &mapper.viewport;
    integers_in(v.y_min, v.y_max)
        .into_iter()
        .flatten()
        .map(|y| Segment::centered(mapper.to_device(0.0, y), Orientation::Horizontal, half_len))
        .collect()
}

/// Everything an axis pass draws, baseline first then its ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLayout {
    pub x_axis: Option<Segment>,
    pub x_ticks: Vec<Segment>,
    pub y_axis: Option<Segment>,
    pub y_ticks: Vec<Segment>,
}

impl AxisLayout {
    pub fn compute(mapper: &DeviceMapper, half_len: f64) -> Self {
        Self {
            x_axis: x_axis_segment(mapper),
            x_ticks: x_axis_ticks(mapper, half_len),
            y_axis: y_axis_segment(mapper),
            y_ticks: y_axis_ticks(mapper, half_len),
        }
    }

    /// Segments in draw order: x baseline, x ticks, y baseline, y ticks.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.x_axis
            .iter()
            .chain(self.x_ticks.iter())
            .chain(self.y_axis.iter())
            .chain(self.y_ticks.iter())
    }

    pub fn len(&self) -> usize {
        self.segments().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of integers in `[ceil(lo), floor(hi)]`, saturating at `u64::MAX`.
pub fn integer_count(lo: f64, hi: f64) -> u64 {
    let first = lo.ceil();
    let last = hi.floor();
    if last >= first {
        ((last - first) as u64).saturating_add(1)
    } else {
        0
    }
}

// None when the range is too dense to tick.
fn integers_in(lo: f64, hi: f64) -> Option<impl Iterator<Item = f64>> {
    let count = integer_count(lo, hi);
    if count > MAX_TICKS {
        debug!(lo, hi, count, "tick range too dense, skipping ticks");
        return None;
    }
    let first = lo.ceil();
    Some((0..count).map(move |i| first + i as f64))
}
