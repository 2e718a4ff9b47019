// File: crates/grapher-core/src/raster.rs
// Summary: Skia CPU raster surface; strokes primitives immediately and encodes PNG.

use anyhow::Result;
use skia_safe as skia;
use tracing::trace;

use crate::error::GrapherError;
use crate::geometry::Segment;
use crate::style::Style;
use crate::surface::{Geometry, Primitive, PrimitiveHandle, RenderSurface};
use crate::types::{CanvasSize, DevicePoint};

pub struct RasterOptions {
    pub background: skia::Color,
    pub anti_alias: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: skia::Color::WHITE,
            anti_alias: true,
        }
    }
}

/// Raster surface backed by an N32 premultiplied Skia surface.
///
/// Resizing reallocates the pixels, which clears anything drawn so far.
pub struct SkiaSurface {
    surface: skia::Surface,
    size: CanvasSize,
    opts: RasterOptions,
    count: usize,
}

impl SkiaSurface {
    pub fn new(size: CanvasSize, opts: RasterOptions) -> Result<Self, GrapherError> {
        let surface = allocate(size, opts.background)?;
        Ok(Self { surface, size, opts, count: 0 })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Number of primitives drawn since the last resize.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Snapshot the current pixels as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the surface to a PNG at `output_png_path`.
    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn stroke_paint(&self, style: &Style) -> Result<skia::Paint, GrapherError> {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.opts.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.stroke_width as f32);
        paint.set_color(parse_color(&style.stroke)?);
        Ok(paint)
    }

    // None when there is no fill, or it is fully transparent, and the pass can be skipped.
    fn fill_paint(&self, style: &Style) -> Result<Option<skia::Paint>, GrapherError> {
        if style.fill.trim().is_empty() {
            return Ok(None);
        }
        let color = parse_color(&style.fill)?;
        if color.a() == 0 {
            return Ok(None);
        }
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.opts.anti_alias);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        Ok(Some(paint))
    }

    fn draw_line(&mut self, segment: &Segment, style: &Style) -> Result<(), GrapherError> {
        let paint = self.stroke_paint(style)?;
        if !fits_f32(segment.from) || !fits_f32(segment.to) {
            return Ok(());
        }
        self.surface.canvas().draw_line(to_sk(segment.from), to_sk(segment.to), &paint);
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[DevicePoint], style: &Style) -> Result<(), GrapherError> {
        let stroke = self.stroke_paint(style)?;
        let fill = self.fill_paint(style)?;
        let canvas = self.surface.canvas();
        for run in finite_runs(points) {
            if run.len() < 2 {
                continue;
            }
            let mut path = skia::Path::new();
            path.move_to(to_sk(run[0]));
            for p in &run[1..] {
                path.line_to(to_sk(*p));
            }
            if let Some(fill) = &fill {
                canvas.draw_path(&path, fill);
            }
            canvas.draw_path(&path, &stroke);
        }
        Ok(())
    }
}

impl RenderSurface for SkiaSurface {
    fn check_style(&self, style: &Style) -> Result<(), GrapherError> {
        self.stroke_paint(style)?;
        self.fill_paint(style)?;
        Ok(())
    }

    fn set_size(&mut self, size: CanvasSize) -> Result<(), GrapherError> {
        self.surface = allocate(size, self.opts.background)?;
        self.size = size;
        self.count = 0;
        Ok(())
    }

    fn create_primitive(&mut self, primitive: Primitive) -> Result<PrimitiveHandle, GrapherError> {
        match &primitive.geometry {
            Geometry::Line(segment) => self.draw_line(segment, &primitive.style)?,
            Geometry::Polyline(points) => self.draw_polyline(points, &primitive.style)?,
        }
        let handle = PrimitiveHandle(self.count);
        self.count += 1;
        trace!(kind = primitive.kind().name(), handle = handle.0, "raster primitive");
        Ok(handle)
    }
}

// ---- helpers ----------------------------------------------------------------

fn allocate(size: CanvasSize, background: skia::Color) -> Result<skia::Surface, GrapherError> {
    let mut surface = skia::surfaces::raster_n32_premul(size.pixels())
        .ok_or_else(|| GrapherError::Surface("failed to create raster surface".into()))?;
    surface.canvas().clear(background);
    Ok(surface)
}

#[inline]
fn to_sk(p: DevicePoint) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// True when both coordinates stay finite after narrowing to Skia's `f32`.
pub fn fits_f32(p: DevicePoint) -> bool {
    (p.x as f32).is_finite() && (p.y as f32).is_finite()
}

/// Split a polyline into maximal runs of points Skia can draw; the rest are
/// dropped, leaving a gap in the stroke.
///
/// Skia skips a whole path once any of its points is non-finite, so
/// coordinates beyond `f32::MAX` split the run as NaN does.
pub fn finite_runs(points: &[DevicePoint]) -> impl Iterator<Item = &[DevicePoint]> + '_ {
    points.split(|p| !fits_f32(*p)).filter(|run| !run.is_empty())
}

/// Parse a CSS colour: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// `transparent`/`none`, or one of a handful of basic names.
pub fn parse_color(s: &str) -> Result<skia::Color, GrapherError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(GrapherError::EmptyColor);
    }
    let bad = || GrapherError::InvalidColor(s.to_string());
    if let Some(hex) = s.strip_prefix('#') {
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(bad)?;
        let (r, g, b, a) = match digits.as_slice() {
            [r, g, b] => (r * 17, g * 17, b * 17, 255),
            [r, g, b, a] => (r * 17, g * 17, b * 17, a * 17),
            [r1, r0, g1, g0, b1, b0] => (r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255),
            [r1, r0, g1, g0, b1, b0, a1, a0] => (r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0),
            _ => return Err(bad()),
        };
        return Ok(skia::Color::from_argb(a, r, g, b));
    }
    let color = match s.to_ascii_lowercase().as_str() {
        "transparent" | "none" => skia::Color::TRANSPARENT,
        "black" => skia::Color::BLACK,
        "white" => skia::Color::WHITE,
        "red" => skia::Color::from_rgb(255, 0, 0),
        "green" => skia::Color::from_rgb(0, 128, 0),
        "blue" => skia::Color::from_rgb(0, 0, 255),
        "gray" | "grey" => skia::Color::from_rgb(128, 128, 128),
        _ => return Err(bad()),
    };
    Ok(color)
}
