// File: crates/grapher-core/src/lib.rs
// Summary: Core library entry point; exports the mapping, sampling, and surface API.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod grapher;
pub mod grid;
pub mod raster;
pub mod sampler;
pub mod scale;
pub mod style;
pub mod surface;
pub mod svg_surface;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{
    integer_count, x_axis_segment, x_axis_ticks, y_axis_segment, y_axis_ticks, AxisConfig, AxisLayout, MAX_TICKS,
};
pub use error::GrapherError;
pub use geometry::Segment;
pub use grapher::{DrawOptions, DrawReport, Grapher, GrapherConfig};
pub use raster::{RasterOptions, SkiaSurface};
pub use sampler::{AdaptiveSampler, SampleReport, SamplerConfig};
pub use scale::{map_to_device, DeviceMapper};
pub use style::Style;
pub use surface::{Primitive, PrimitiveHandle, PrimitiveKind, RecordingSurface, RenderSurface};
pub use svg_surface::SvgSurface;
pub use theme::{function_letter, palette_color};
pub use types::{CanvasSize, DevicePoint};
pub use view::Viewport;
