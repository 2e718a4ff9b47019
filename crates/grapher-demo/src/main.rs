// File: crates/grapher-demo/src/main.rs
// Summary: Demo plots a small gallery of functions (smooth, periodic, discontinuous) to SVG and PNG.

use anyhow::{Context, Result};
use grapher_core::{
    function_letter, palette_color, AdaptiveSampler, CanvasSize, DeviceMapper, DevicePoint, DrawOptions, Grapher,
    RasterOptions, SkiaSurface, SvgSurface, Viewport,
};
use std::path::{Path, PathBuf};
use tracing::info;

type Func = fn(f64) -> f64;

struct Plot {
    name: &'static str,
    viewport: Viewport,
    equalize: bool,
    functions: Vec<Func>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Args: [out_dir] [--csv]
    let mut out_dir = PathBuf::from("target/out");
    let mut dump_csv = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--csv" => dump_csv = true,
            other => out_dir = PathBuf::from(other),
        }
    }
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output dir '{}'", out_dir.display()))?;
    println!("Writing plots to {}", out_dir.display());

    let size = CanvasSize::new(640.0, 480.0)?;
    for plot in gallery() {
        let svg_path = out_dir.join(format!("{}.svg", plot.name));
        let png_path = svg_path.with_extension("png");

        let mut svg = Grapher::new(SvgSurface::new(size), size.width, size.height)?;
        let mut png = Grapher::new(SkiaSurface::new(size, RasterOptions::default())?, size.width, size.height)?;
        for (i, f) in plot.functions.iter().enumerate() {
            let opts = DrawOptions {
                equalize_axes: plot.equalize,
                draw_axes: i == 0,
                line_color: palette_color(i).to_string(),
                id: Some(function_letter(i).to_string()),
            };
            let report = svg.draw_function(f, &plot.viewport, &opts)?;
            png.draw_function(f, &plot.viewport, &opts)?;
            info!(
                plot = plot.name,
                function = %function_letter(i),
                points = report.samples.points.len(),
                refined = report.samples.refined_points,
                "plotted"
            );
        }

        svg.surface().save(&svg_path).with_context(|| format!("failed to write '{}'", svg_path.display()))?;
        println!("Wrote {}", svg_path.display());
        png.surface_mut().write_png(&png_path).with_context(|| format!("failed to write '{}'", png_path.display()))?;
        println!("Wrote {}", png_path.display());

        if dump_csv {
            let csv_path = svg_path.with_extension("csv");
            write_samples_csv(&csv_path, &plot, size)
                .with_context(|| format!("failed to write '{}'", csv_path.display()))?;
            println!("Wrote {}", csv_path.display());
        }
    }
    Ok(())
}

fn gallery() -> Vec<Plot> {
    vec![
        Plot {
            name: "trig",
            viewport: Viewport::default(),
            equalize: true,
            functions: vec![f64::sin as Func, f64::cos, |x: f64| (x * 0.5).sin() * 4.0],
        },
        Plot {
            name: "poles",
            viewport: Viewport::default(),
            equalize: false,
            functions: vec![f64::tan as Func, |x: f64| 1.0 / x],
        },
        Plot {
            name: "steps",
            viewport: Viewport { x_min: -5.0, x_max: 5.0, y_min: -3.0, y_max: 3.0 },
            equalize: false,
            functions: vec![f64::floor as Func, |x: f64| if x < 0.0 { -2.0 } else { 2.0 }],
        },
        Plot {
            name: "roots",
            viewport: Viewport { x_min: -2.0, x_max: 10.0, y_min: -1.0, y_max: 4.0 },
            equalize: true,
            // sqrt of negatives is NaN: the curve simply starts at x = 0
            functions: vec![f64::sqrt as Func, f64::ln],
        },
    ]
}

/// One row per emitted device point, tagged with the function letter.
fn write_samples_csv(path: &Path, plot: &Plot, size: CanvasSize) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["function", "index", "device_x", "device_y"])?;

    let viewport = plot.viewport.effective(&size, plot.equalize);
    let mapper = DeviceMapper::new(viewport, size);
    let sampler = AdaptiveSampler::default();
    for (i, f) in plot.functions.iter().enumerate() {
        let letter = function_letter(i).to_string();
        let points: Vec<DevicePoint> = sampler.sample(f, &mapper);
        for (k, p) in points.iter().enumerate() {
            wtr.write_record(&[letter.clone(), k.to_string(), p.x.to_string(), p.y.to_string()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
