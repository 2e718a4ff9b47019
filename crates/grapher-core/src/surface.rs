// File: crates/grapher-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait, primitives, and an in-memory recorder.

use std::fmt::Write as _;

use tracing::trace;

use crate::error::GrapherError;
use crate::geometry::Segment;
use crate::style::Style;
use crate::types::{CanvasSize, DevicePoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Line,
    Polyline,
}

impl PrimitiveKind {
    /// Element name as an SVG renderer would spell it.
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Line => "line",
            PrimitiveKind::Polyline => "polyline",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Line(Segment),
    Polyline(Vec<DevicePoint>),
}

/// A single drawable element: geometry, style, and an optional element id.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub geometry: Geometry,
    pub style: Style,
    pub id: Option<String>,
}

impl Primitive {
    pub fn line(segment: Segment, style: Style) -> Self {
        Self { geometry: Geometry::Line(segment), style, id: None }
    }

    pub fn polyline(points: Vec<DevicePoint>, style: Style) -> Self {
        Self { geometry: Geometry::Polyline(points), style, id: None }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self.geometry {
            Geometry::Line(_) => PrimitiveKind::Line,
            Geometry::Polyline(_) => PrimitiveKind::Polyline,
        }
    }

    /// Flat attribute mapping: geometry first, then style, then `id`.
    ///
    /// Numbers use Rust's float formatting, so NaN and infinities show up
    /// verbatim ("NaN", "inf") for the consumer to deal with.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(8);
        match &self.geometry {
            Geometry::Line(s) => {
                attrs.push(("x1", s.from.x.to_string()));
                attrs.push(("y1", s.from.y.to_string()));
                attrs.push(("x2", s.to.x.to_string()));
                attrs.push(("y2", s.to.y.to_string()));
            }
            Geometry::Polyline(points) => attrs.push(("points", format_points(points))),
        }
        attrs.push(("stroke", self.style.stroke.clone()));
        attrs.push(("fill", self.style.fill.clone()));
        attrs.push(("stroke-width", self.style.stroke_width.to_string()));
        if let Some(id) = &self.id {
            attrs.push(("id", id.clone()));
        }
        attrs
    }
}

/// `"x,y x,y ..."`, the SVG `points` syntax.
pub fn format_points(points: &[DevicePoint]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", p.x, p.y);
    }
    out
}

/// Opaque reference to a primitive created on a surface (its creation index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveHandle(pub usize);

/// Anything that can receive lines and polylines in device space.
pub trait RenderSurface {
    /// Attach a new canvas size. Calling it twice with the same size is a no-op
    /// as far as the visible result is concerned.
    fn set_size(&mut self, size: CanvasSize) -> Result<(), GrapherError>;

    /// Reject a style this surface cannot draw, before anything is emitted.
    fn check_style(&self, _style: &Style) -> Result<(), GrapherError> {
        Ok(())
    }

    fn create_primitive(&mut self, primitive: Primitive) -> Result<PrimitiveHandle, GrapherError>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn set_size(&mut self, size: CanvasSize) -> Result<(), GrapherError> {
        (**self).set_size(size)
    }

    fn check_style(&self, style: &Style) -> Result<(), GrapherError> {
        (**self).check_style(style)
    }

    fn create_primitive(&mut self, primitive: Primitive) -> Result<PrimitiveHandle, GrapherError> {
        (**self).create_primitive(primitive)
    }
}

/// Surface that just keeps everything it is given.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub size: Option<CanvasSize>,
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: PrimitiveHandle) -> Option<&Primitive> {
        self.primitives.get(handle.0)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(|p| p.kind() == PrimitiveKind::Line)
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(|p| p.kind() == PrimitiveKind::Polyline)
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn set_size(&mut self, size: CanvasSize) -> Result<(), GrapherError> {
        self.size = Some(size);
        Ok(())
    }

    fn create_primitive(&mut self, primitive: Primitive) -> Result<PrimitiveHandle, GrapherError> {
        let handle = PrimitiveHandle(self.primitives.len());
        trace!(kind = primitive.kind().name(), handle = handle.0, "record primitive");
        self.primitives.push(primitive);
        Ok(handle)
    }
}
