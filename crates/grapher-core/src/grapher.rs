// File: crates/grapher-core/src/grapher.rs
// Summary: Grapher driver: owns a surface and canvas size, draws axes and function curves.

use tracing::debug;

use crate::axis::{AxisConfig, AxisLayout};
use crate::error::GrapherError;
use crate::sampler::{AdaptiveSampler, SampleReport, SamplerConfig};
use crate::scale::DeviceMapper;
use crate::style::Style;
use crate::surface::{Primitive, PrimitiveHandle, RenderSurface};
use crate::types::CanvasSize;
use crate::view::Viewport;

/// Per-call drawing switches.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    /// Widen the viewport so x and y share one scale.
    pub equalize_axes: bool,
    /// Draw the baselines and integer ticks before the curve.
    pub draw_axes: bool,
    pub line_color: String,
    /// Written as the polyline's `id` attribute when set.
    pub id: Option<String>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            equalize_axes: true,
            draw_axes: true,
            line_color: "#666".into(),
            id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GrapherConfig {
    pub sampler: SamplerConfig,
    pub axes: AxisConfig,
    pub curve_stroke_width: f64,
    pub defaults: DrawOptions,
}

impl Default for GrapherConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerConfig::default(),
            axes: AxisConfig::default(),
            curve_stroke_width: 2.0,
            defaults: DrawOptions::default(),
        }
    }
}

/// What a single `draw_function` call produced.
#[derive(Clone, Debug)]
pub struct DrawReport {
    /// Viewport actually used (after equalization).
    pub viewport: Viewport,
    pub axis_handles: Vec<PrimitiveHandle>,
    pub curve: PrimitiveHandle,
    pub samples: SampleReport,
}

pub struct Grapher<S: RenderSurface> {
    surface: S,
    canvas: CanvasSize,
    config: GrapherConfig,
    sampler: AdaptiveSampler,
}

impl<S: RenderSurface> Grapher<S> {
    pub fn new(surface: S, width: f64, height: f64) -> Result<Self, GrapherError> {
        Self::with_config(surface, width, height, GrapherConfig::default())
    }

    pub fn with_config(mut surface: S, width: f64, height: f64, config: GrapherConfig) -> Result<Self, GrapherError> {
        let canvas = CanvasSize::new(width, height)?;
        let sampler = AdaptiveSampler::new(config.sampler)?;
        config.axes.style.validate()?;
        surface.set_size(canvas)?;
        Ok(Self { surface, canvas, config, sampler })
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    pub fn config(&self) -> &GrapherConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Change the canvas size and re-attach it to the surface.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), GrapherError> {
        let canvas = CanvasSize::new(width, height)?;
        self.surface.set_size(canvas)?;
        self.canvas = canvas;
        debug!(width, height, "canvas resized");
        Ok(())
    }

    /// Draw the visible baselines and their ticks for `viewport` as given.
    pub fn draw_axes(&mut self, viewport: &Viewport) -> Result<Vec<PrimitiveHandle>, GrapherError> {
        viewport.validate()?;
        self.surface.check_style(&self.config.axes.style)?;
        let mapper = DeviceMapper::new(*viewport, self.canvas);
        let layout = AxisLayout::compute(&mapper, self.config.axes.tick_half_len);
        layout
            .segments()
            .map(|s| self.surface.create_primitive(Primitive::line(*s, self.config.axes.style.clone())))
            .collect()
    }

    /// Plot `f` with the grapher's default options.
    pub fn draw<F>(&mut self, f: F, viewport: &Viewport) -> Result<DrawReport, GrapherError>
    where
        F: FnMut(f64) -> f64,
    {
        let opts = self.config.defaults.clone();
        self.draw_function(f, viewport, &opts)
    }

    /// Plot `f` over `viewport` as a single polyline, optionally equalizing
    /// the frame and drawing axes first.
    pub fn draw_function<F>(&mut self, f: F, viewport: &Viewport, opts: &DrawOptions) -> Result<DrawReport, GrapherError>
    where
        F: FnMut(f64) -> f64,
    {
        viewport.validate()?;
        let style = Style::curve(opts.line_color.as_str(), self.config.curve_stroke_width)?;
        // a style the surface rejects must fail before the axes are drawn
        self.surface.check_style(&style)?;

        let effective = viewport.effective(&self.canvas, opts.equalize_axes);
        let axis_handles = if opts.draw_axes { self.draw_axes(&effective)? } else { Vec::new() };

        let mapper = DeviceMapper::new(effective, self.canvas);
        let samples = self.sampler.sample_report(f, &mapper);

        let mut curve = Primitive::polyline(samples.points.clone(), style);
        if let Some(id) = &opts.id {
            curve = curve.with_id(id.as_str());
        }
        let curve = self.surface.create_primitive(curve)?;

        debug!(
            points = samples.points.len(),
            refined = samples.refined_points,
            evaluations = samples.evaluations,
            x_min = effective.x_min,
            x_max = effective.x_max,
            y_min = effective.y_min,
            y_max = effective.y_max,
            "drew function"
        );
        Ok(DrawReport { viewport: effective, axis_handles, curve, samples })
    }
}
