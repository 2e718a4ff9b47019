// File: crates/grapher-core/tests/smoke.rs
// Purpose: Basic end-to-end raster render writing a PNG.

use grapher_core::{
    CanvasSize, DevicePoint, DrawOptions, Grapher, Primitive, RasterOptions, RenderSurface, SkiaSurface, Style, Viewport,
};

#[test]
fn render_smoke_png() {
    let size = CanvasSize::new(200.0, 200.0).unwrap();
    let surface = SkiaSurface::new(size, RasterOptions::default()).expect("raster surface");
    let mut g = Grapher::new(surface, size.width, size.height).unwrap();
    let opts = DrawOptions { line_color: "#E06B74".into(), ..DrawOptions::default() };
    g.draw_function(|x| x, &Viewport::default(), &opts).expect("draw");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    g.surface_mut().write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = g.surface_mut().to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (200, 200));
    // corner stays background, the centre is covered by both axes and the curve
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_ne!(img.get_pixel(100, 100).0, [255, 255, 255, 255]);
}

#[test]
fn resize_clears_the_raster() {
    let size = CanvasSize::new(64.0, 48.0).unwrap();
    let mut g = Grapher::new(SkiaSurface::new(size, RasterOptions::default()).unwrap(), 64.0, 48.0).unwrap();
    g.draw(|x| x.sin(), &Viewport::default()).unwrap();
    assert!(!g.surface().is_empty());

    g.set_canvas_size(32.0, 16.0).unwrap();
    assert!(g.surface().is_empty());
    let bytes = g.surface_mut().to_png_bytes().unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (32, 16));
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn invalid_line_color_is_reported_before_anything_is_drawn() {
    let size = CanvasSize::new(32.0, 32.0).unwrap();
    let mut g = Grapher::new(SkiaSurface::new(size, RasterOptions::default()).unwrap(), 32.0, 32.0).unwrap();
    for draw_axes in [false, true] {
        let opts = DrawOptions { line_color: "not-a-color".into(), draw_axes, ..DrawOptions::default() };
        let err = g.draw_function(|x| x, &Viewport::default(), &opts).unwrap_err();
        assert!(matches!(err, grapher_core::GrapherError::InvalidColor(_)));
        assert!(g.surface().is_empty(), "axes drawn before the colour was rejected");
    }
    let img = image::load_from_memory(&g.surface_mut().to_png_bytes().unwrap()).unwrap().to_rgba8();
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn empty_fill_means_unfilled() {
    let size = CanvasSize::new(32.0, 32.0).unwrap();
    let mut s = SkiaSurface::new(size, RasterOptions::default()).unwrap();
    let style = Style::new("#000", "", 1.0).unwrap();
    s.check_style(&style).unwrap();
    let pts = vec![DevicePoint::new(0.0, 16.0), DevicePoint::new(32.0, 16.0)];
    s.create_primitive(Primitive::polyline(pts, style)).unwrap();
    assert_eq!(s.len(), 1);
}

#[test]
fn points_beyond_f32_range_leave_the_rest_of_the_curve() {
    // exp(10x) overflows f32 in device space near the right edge only
    let size = CanvasSize::new(100.0, 100.0).unwrap();
    let mut g = Grapher::new(SkiaSurface::new(size, RasterOptions::default()).unwrap(), 100.0, 100.0).unwrap();
    let opts = DrawOptions { draw_axes: false, equalize_axes: false, line_color: "#000".into(), id: None };
    let report = g.draw_function(|x| (10.0 * x).exp(), &Viewport::default(), &opts).unwrap();
    assert!(report.samples.points.iter().all(|p| p.y.is_finite()));
    assert!(report.samples.points.iter().any(|p| !((p.y as f32).is_finite())));

    let img = image::load_from_memory(&g.surface_mut().to_png_bytes().unwrap()).unwrap().to_rgba8();
    // the flat left part of the curve runs along y = 0 across the middle
    assert!(img.pixels().any(|p| p.0 != [255, 255, 255, 255]), "curve vanished");
}

#[test]
fn discontinuous_curve_still_renders() {
    let size = CanvasSize::new(120.0, 120.0).unwrap();
    let mut g = Grapher::new(SkiaSurface::new(size, RasterOptions::default()).unwrap(), 120.0, 120.0).unwrap();
    let report = g.draw(|x| 1.0 / x, &Viewport::default()).unwrap();
    assert!(report.samples.points.len() > 300);
    assert!(g.surface_mut().to_png_bytes().unwrap().len() > 0);
}
