// File: crates/grapher-core/src/sampler.rs
// Summary: Adaptive function sampler producing a device-space polyline.
//
// The x range is walked on a fixed grid. Whenever the next candidate lands
// more than `jump_threshold` device units away (vertically) from the last
// emitted point, the sampler steps back toward the previous x with a halving
// fraction and emits the intermediate point it settles on, then retries the
// same grid target. The search depth is fixed, so a true discontinuity costs
// a bounded number of evaluations and may still leave a large jump.

use tracing::trace;

use crate::error::GrapherError;
use crate::grid::linspace;
use crate::scale::DeviceMapper;
use crate::types::DevicePoint;

/// Default number of nominal grid points.
pub const NUM_FN_PTS: usize = 300;
/// Default vertical jump, in device units, that triggers refinement.
pub const JUMP_THRESHOLD: f64 = 30.0;
/// Refinement stops once the interpolation fraction falls to this value.
pub const MIN_PERC: f64 = 0.0001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    pub num_fn_pts: usize,
    pub jump_threshold: f64,
    pub min_perc: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { num_fn_pts: NUM_FN_PTS, jump_threshold: JUMP_THRESHOLD, min_perc: MIN_PERC }
    }
}

/// Points plus counters describing how much refinement happened.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleReport {
    pub points: Vec<DevicePoint>,
    /// Nominal grid targets visited.
    pub grid_points: usize,
    /// Points emitted short of their grid target.
    pub refined_points: usize,
    /// Total calls into the sampled function.
    pub evaluations: usize,
    /// Most inner refinement steps spent on a single candidate.
    pub max_refinement_depth: usize,
}

/// Loop state carried from one emitted point to the next.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    x_prev: f64,
    prev_device_y: Option<f64>,
}

/// Outcome of evaluating one candidate, after any refinement.
#[derive(Clone, Copy, Debug)]
struct Probe {
    x: f64,
    point: DevicePoint,
    evaluations: usize,
    depth: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct AdaptiveSampler {
    config: SamplerConfig,
}

impl AdaptiveSampler {
    pub fn new(config: SamplerConfig) -> Result<Self, GrapherError> {
        if config.num_fn_pts < 2 {
            return Err(GrapherError::TooFewSamples(config.num_fn_pts));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample `f` over the mapper's x range and return the device polyline.
    pub fn sample<F>(&self, f: F, mapper: &DeviceMapper) -> Vec<DevicePoint>
    where
        F: FnMut(f64) -> f64,
    {
        self.sample_report(f, mapper).points
    }

    /// Same walk as [`AdaptiveSampler::sample`], keeping the counters.
    pub fn sample_report<F>(&self, mut f: F, mapper: &DeviceMapper) -> SampleReport
    where
        F: FnMut(f64) -> f64,
    {
        let v = &mapper.viewport;
        let mut report = SampleReport {
            points: Vec::with_capacity(self.config.num_fn_pts),
            ..SampleReport::default()
        };
        let mut cursor = Cursor { x_prev: v.x_min, prev_device_y: None };

        for x_target in linspace(v.x_min, v.x_max, self.config.num_fn_pts) {
            report.grid_points += 1;
            loop {
                let probe = self.probe(&mut f, mapper, cursor, x_target);
                report.points.push(probe.point);
                report.evaluations += probe.evaluations;
                report.max_refinement_depth = report.max_refinement_depth.max(probe.depth);

                // A candidate that rounds back onto x_prev cannot advance; give
                // up on this target rather than spin.
                let advanced = cursor.prev_device_y.is_none() || probe.x > cursor.x_prev;
                cursor = Cursor { x_prev: probe.x, prev_device_y: Some(probe.point.y) };

                if probe.x < x_target && advanced {
                    report.refined_points += 1;
                    continue;
                }
                break;
            }
        }
        report
    }

    fn probe<F>(&self, f: &mut F, mapper: &DeviceMapper, cursor: Cursor, x_target: f64) -> Probe
    where
        F: FnMut(f64) -> f64,
    {
        let mut x = x_target;
        let mut point = mapper.to_device(x, f(x));
        let mut probe = Probe { x, point, evaluations: 1, depth: 0 };

        let Some(prev_y) = cursor.prev_device_y else {
            return probe;
        };

        let mut perc = 0.5;
        while (prev_y - point.y).abs() > self.config.jump_threshold && perc > self.config.min_perc {
            x = (1.0 - perc) * cursor.x_prev + perc * x_target;
            point = mapper.to_device(x, f(x));
            probe.evaluations += 1;
            probe.depth += 1;
            perc /= 2.0;
        }
        if probe.depth > 0 {
            trace!(x_target, x, depth = probe.depth, "refined sample");
        }
        probe.x = x;
        probe.point = point;
        probe
    }
}

impl Default for AdaptiveSampler {
    fn default() -> Self {
        Self { config: SamplerConfig::default() }
    }
}
