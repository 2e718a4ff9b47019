// File: crates/grapher-core/benches/render_bench.rs
// Summary: Full draw (axes + curve) to SVG text and to PNG bytes.

use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use grapher_core::{CanvasSize, Grapher, RasterOptions, SkiaSurface, SvgSurface, Viewport};

fn bench_render(c: &mut Criterion) {
    let size = CanvasSize { width: 800.0, height: 500.0 };
    let mut group = c.benchmark_group("render");

    group.bench_function("svg_sine", |b| {
        b.iter(|| -> Result<()> {
            let mut g = Grapher::new(SvgSurface::new(size), size.width, size.height)?;
            g.draw(f64::sin, &Viewport::default())?;
            black_box(g.surface().to_svg_string());
            Ok(())
        });
    });

    group.bench_function("png_tangent", |b| {
        b.iter(|| -> Result<()> {
            let surface = SkiaSurface::new(size, RasterOptions::default())?;
            let mut g = Grapher::new(surface, size.width, size.height)?;
            g.draw(f64::tan, &Viewport::default())?;
            black_box(g.surface_mut().to_png_bytes()?);
            Ok(())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
