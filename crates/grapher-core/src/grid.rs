// File: crates/grapher-core/src/grid.rs
// Summary: Nominal sampling grid along the x range.

/// `steps` evenly spaced values from `start` to `end`: `start + i * step`.
///
/// Values are computed from the index rather than accumulated, so the last
/// target carries at most one rounding error.
pub fn linspace(start: f64, end: f64, steps: usize) -> impl Iterator<Item = f64> {
    let step = if steps < 2 { 0.0 } else { (end - start) / (steps as f64 - 1.0) };
    (0..steps).map(move |i| start + i as f64 * step)
}
