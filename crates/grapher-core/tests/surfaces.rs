// File: crates/grapher-core/tests/surfaces.rs
// Purpose: Primitive attribute mapping, SVG document output, and raster colour parsing.

use grapher_core::raster::{finite_runs, fits_f32, parse_color};
use grapher_core::surface::format_points;
use grapher_core::{
    CanvasSize, DevicePoint, GrapherError, Primitive, PrimitiveHandle, PrimitiveKind, RecordingSurface, RenderSurface,
    Segment, Style, SvgSurface,
};
use skia_safe::Color;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(DevicePoint::new(x1, y1), DevicePoint::new(x2, y2))
}

#[test]
fn line_attributes_in_order() {
    let p = Primitive::line(seg(0.0, 200.0, 400.0, 200.0), Style::light());
    assert_eq!(p.kind(), PrimitiveKind::Line);
    let attrs = p.attributes();
    let names: Vec<_> = attrs.iter().map(|(k, _)| *k).collect();
    assert_eq!(names, ["x1", "y1", "x2", "y2", "stroke", "fill", "stroke-width"]);
    assert_eq!(attrs[0].1, "0");
    assert_eq!(attrs[1].1, "200");
    assert_eq!(attrs[4].1, "#ddd");
    assert_eq!(attrs[5].1, "transparent");
    assert_eq!(attrs[6].1, "1.5");
}

#[test]
fn polyline_attributes_carry_points_and_id() {
    let pts = vec![DevicePoint::new(0.0, 400.0), DevicePoint::new(200.5, 199.25), DevicePoint::new(400.0, 0.0)];
    let p = Primitive::polyline(pts, Style::curve("#E06B74", 2.0).unwrap()).with_id("f");
    let attrs = p.attributes();
    assert_eq!(attrs[0], ("points", "0,400 200.5,199.25 400,0".to_string()));
    assert_eq!(attrs.last().unwrap(), &("id", "f".to_string()));
    assert!(attrs.contains(&("stroke-width", "2".to_string())));
}

#[test]
fn non_finite_points_are_written_verbatim() {
    let pts = [DevicePoint::new(1.0, f64::NAN), DevicePoint::new(2.0, f64::NEG_INFINITY)];
    assert_eq!(format_points(&pts), "1,NaN 2,-inf");
    assert_eq!(format_points(&[]), "");
}

#[test]
fn style_requires_a_stroke_color() {
    assert!(matches!(Style::new("", "none", 1.0), Err(GrapherError::EmptyColor)));
    assert!(matches!(Style::curve("  ", 2.0), Err(GrapherError::EmptyColor)));
    assert!(Style::new("#000", "", 1.0).is_ok());
}

#[test]
fn recording_surface_hands_out_sequential_handles() {
    let mut s = RecordingSurface::new();
    s.set_size(CanvasSize::new(10.0, 20.0).unwrap()).unwrap();
    let a = s.create_primitive(Primitive::line(seg(0.0, 0.0, 1.0, 1.0), Style::light())).unwrap();
    let b = s.create_primitive(Primitive::polyline(vec![], Style::dark())).unwrap();
    assert_eq!((a, b), (PrimitiveHandle(0), PrimitiveHandle(1)));
    assert_eq!(s.size, Some(CanvasSize { width: 10.0, height: 20.0 }));
    assert_eq!(s.lines().count(), 1);
    assert_eq!(s.polylines().count(), 1);
    assert_eq!(s.get(b).map(|p| p.kind()), Some(PrimitiveKind::Polyline));
}

#[test]
fn svg_document_contains_elements_and_size() {
    let mut s = SvgSurface::new(CanvasSize::new(400.0, 300.0).unwrap());
    s.create_primitive(Primitive::line(seg(0.0, 150.0, 400.0, 150.0), Style::light())).unwrap();
    s.create_primitive(
        Primitive::polyline(vec![DevicePoint::new(0.0, 300.0), DevicePoint::new(400.0, 0.0)], Style::curve("#62AEEF", 2.0).unwrap())
            .with_id("g"),
    )
    .unwrap();
    assert_eq!(s.len(), 2);

    let text = s.to_svg_string();
    assert!(text.contains("<svg"));
    assert!(text.contains(r#"width="400""#));
    assert!(text.contains(r#"height="300""#));
    assert!(text.contains("<line"));
    assert!(text.contains(r#"x2="400""#));
    assert!(text.contains("<polyline"));
    assert!(text.contains(r#"points="0,300 400,0""#));
    assert!(text.contains(r##"stroke="#62AEEF""##));
    assert!(text.contains(r#"id="g""#));
}

#[test]
fn svg_resize_reattaches_dimensions() {
    let mut s = SvgSurface::new(CanvasSize::new(400.0, 400.0).unwrap());
    let size = CanvasSize::new(640.0, 480.0).unwrap();
    s.set_size(size).unwrap();
    s.set_size(size).unwrap();
    let text = s.to_svg_string();
    assert!(text.contains(r#"width="640""#));
    assert!(text.contains(r#"height="480""#));
    assert!(!text.contains(r#"width="400""#));
    assert_eq!(s.size(), size);
}

#[test]
fn css_colors_parse() {
    assert_eq!(parse_color("#666").unwrap(), Color::from_argb(255, 0x66, 0x66, 0x66));
    assert_eq!(parse_color("#E06B74").unwrap(), Color::from_argb(255, 0xE0, 0x6B, 0x74));
    assert_eq!(parse_color("#cc842680").unwrap(), Color::from_argb(0x80, 0xcc, 0x84, 0x26));
    assert_eq!(parse_color("#f008").unwrap(), Color::from_argb(0x88, 0xff, 0x00, 0x00));
    assert_eq!(parse_color("transparent").unwrap().a(), 0);
    assert_eq!(parse_color("White").unwrap(), Color::WHITE);
}

#[test]
fn bad_colors_are_rejected() {
    assert!(matches!(parse_color(""), Err(GrapherError::EmptyColor)));
    assert!(matches!(parse_color("#12"), Err(GrapherError::InvalidColor(_))));
    assert!(matches!(parse_color("#gggggg"), Err(GrapherError::InvalidColor(_))));
    assert!(matches!(parse_color("chartreuse"), Err(GrapherError::InvalidColor(_))));
}

#[test]
fn polylines_split_at_non_finite_points() {
    let p = |x: f64, y: f64| DevicePoint::new(x, y);
    let pts = [p(0.0, 0.0), p(1.0, f64::NAN), p(2.0, 2.0), p(3.0, 3.0), p(4.0, f64::INFINITY)];
    let runs: Vec<_> = finite_runs(&pts).map(|r| r.len()).collect();
    assert_eq!(runs, [1, 2]);
}

#[test]
fn coordinates_beyond_f32_split_runs() {
    let p = |x: f64, y: f64| DevicePoint::new(x, y);
    assert!(fits_f32(p(1.0, 3.0e38)));
    assert!(!fits_f32(p(1.0, -1e40)));

    let pts = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, -1e40), p(3.0, 3.0), p(4.0, 4.0), p(5.0, 1e300)];
    let runs: Vec<_> = finite_runs(&pts).map(|r| r.len()).collect();
    assert_eq!(runs, [2, 2]);
}
