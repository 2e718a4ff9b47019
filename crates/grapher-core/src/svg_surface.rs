// File: crates/grapher-core/src/svg_surface.rs
// Summary: Vector surface that builds an SVG document element by element.

use std::path::Path;

use svg::node::element::{Line, Polyline};
use svg::{Document, Node};
use tracing::trace;

use crate::error::GrapherError;
use crate::surface::{Primitive, PrimitiveHandle, PrimitiveKind, RenderSurface};
use crate::types::CanvasSize;

/// Appends one `<line>`/`<polyline>` per primitive to an in-memory document.
///
/// Attribute values are copied verbatim from [`Primitive::attributes`]; a
/// polyline containing NaN is left for the SVG viewer to reject.
#[derive(Debug)]
pub struct SvgSurface {
    document: Document,
    size: CanvasSize,
    count: usize,
}

impl SvgSurface {
    pub fn new(size: CanvasSize) -> Self {
        let mut surface = Self { document: Document::new(), size, count: 0 };
        surface.attach_size();
        surface
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Number of primitives appended so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Write the document to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        svg::save(path, &self.document)?;
        Ok(())
    }

    fn attach_size(&mut self) {
        self.document.assign("width", self.size.width);
        self.document.assign("height", self.size.height);
    }
}

impl RenderSurface for SvgSurface {
    fn set_size(&mut self, size: CanvasSize) -> Result<(), GrapherError> {
        self.size = size;
        self.attach_size();
        Ok(())
    }

    fn create_primitive(&mut self, primitive: Primitive) -> Result<PrimitiveHandle, GrapherError> {
        let attrs = primitive.attributes();
        match primitive.kind() {
            PrimitiveKind::Line => {
                let mut el = Line::new();
                for (name, value) in attrs {
                    el.assign(name, value);
                }
                self.document.append(el);
            }
            PrimitiveKind::Polyline => {
                let mut el = Polyline::new();
                for (name, value) in attrs {
                    el.assign(name, value);
                }
                self.document.append(el);
            }
        }
        let handle = PrimitiveHandle(self.count);
        self.count += 1;
        trace!(kind = primitive.kind().name(), handle = handle.0, "svg element");
        Ok(handle)
    }
}
