// File: crates/prettyplot-render-skia/tests/render_output.rs
// Purpose: End-to-end renders through the dispatcher: PNG/SVG/PDF files, RGBA buffers, a few pixels.

use std::path::PathBuf;

use prettyplot_core::render::{
    AxisId, AxisStyle, FigureSpec, HistogramKind, HistogramMark, Legend, LegendEntry, LineMark,
};
use prettyplot_core::{
    single_hist, single_imshow, single_plot, AxisGroup, AxisValue, Bins, Color, ErrorBar, FontFamily,
    Grid, HistParams, ImageFormat, ImshowParams, LegendLoc, LineStyle, Marker, OutputParams,
    PlotParams, Renderer, SeriesSet, StyleValue, XData, XYData,
};
use prettyplot_render_skia::{MarkId, SkiaRenderer};

fn out_path(name: &str) -> PathBuf {
    let out = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    out
}

fn to_file(name: &str, img_fmt: ImageFormat) -> OutputParams {
    OutputParams { filename: Some(out_path(name)), img_fmt, show: false }
}

fn wave(n: usize, phase: f64) -> XYData {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.25).collect();
    let y = x.iter().map(|x| (x + phase).sin()).collect();
    XYData::new(x, y).unwrap()
}

#[test]
fn dual_axis_plot_writes_png() {
    let left = wave(40, 0.0).with_yerr(ErrorBar::Symmetric(vec![0.1; 40])).unwrap();
    let right = XYData::from_points(&[(0.0, 10.0), (5.0, 100.0), (9.75, 1000.0)]);
    let params = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![left, wave(40, 1.0)], vec![right]),
        scatterplot: AxisValue::Split(false, true),
        y_log_scale: AxisValue::Split(false, true),
        linestyles: Some(StyleValue::PerSeries(vec![LineStyle::Solid, LineStyle::Dashed, LineStyle::None])),
        legend_labels: Some(StyleValue::PerSeries(vec!["sin".into(), "shifted".into(), "growth".into()])),
        x_label: "time".into(),
        y_label: AxisValue::Split("signal".into(), "count".into()),
        vlines: vec![2.0],
        grid_linewidth: 1.0,
        output: to_file("plot.png", ImageFormat::Png),
        ..PlotParams::default()
    };
    let mut r = SkiaRenderer::new();
    single_plot(&mut r, &params).expect("render should succeed");
    assert!(!r.is_open());

    let bytes = std::fs::read(out_path("plot.png")).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decodes").to_rgba8();
    assert_eq!((img.width(), img.height()), (640, 480));
}

#[test]
fn imshow_writes_svg_with_colorbar() {
    let mut params = ImshowParams::new(Grid::from_fn(8, 12, |r, c| (r as f64 - 4.0).hypot(c as f64 - 6.0)));
    params.cbticks = Some(vec![0.0, 3.0, 6.0]);
    params.x_label = "column".into();
    params.figure.title = "distance".into();
    params.output = to_file("imshow.svg", ImageFormat::Svg);
    let mut r = SkiaRenderer::new();
    single_imshow(&mut r, &params).expect("render should succeed");

    let svg = std::fs::read_to_string(out_path("imshow.svg")).expect("output exists");
    assert!(svg.contains("<svg"), "should be an SVG document");
    assert!(svg.len() > 1000, "should contain drawing commands");
}

#[test]
fn histogram_writes_pdf() {
    let samples: Vec<f64> = (0..100).map(|i| ((i * 37) % 50) as f64 * 0.1).collect();
    let params = HistParams {
        x_data_sets: vec![XData::new(samples)],
        bins: Bins::Count(8),
        x_label: "value".into(),
        output: to_file("hist.pdf", ImageFormat::Pdf),
        ..HistParams::default()
    };
    let mut r = SkiaRenderer::new();
    single_hist(&mut r, &params).expect("render should succeed");

    let bytes = std::fs::read(out_path("hist.pdf")).expect("output exists");
    assert!(bytes.starts_with(b"%PDF"), "should be a PDF header");
    assert!(bytes.windows(5).any(|w| w == b"%%EOF"), "document should be closed");

    r.create_figure(&FigureSpec::default()).unwrap();
    assert!(r.pdf_bytes().unwrap().starts_with(b"%PDF"));
    r.close_figure();
}

#[test]
fn histogram_bars_are_visible() {
    let samples: Vec<f64> = (0..200).map(|i| (i % 20) as f64).collect();
    let params = HistParams {
        x_data_sets: vec![XData::new(samples)],
        bins: Bins::Count(5),
        colors: Some(StyleValue::Scalar(Color::rgb(255, 0, 0))),
        output: OutputParams { show: false, ..OutputParams::default() },
        ..HistParams::default()
    };
    let mut r = SkiaRenderer::new();
    single_hist(&mut r, &params).unwrap();
    assert!(!r.is_open());

    // The dispatcher closes its figure; draw equal bars directly to read pixels back.
    r.create_figure(&FigureSpec::default()).unwrap();
    for edge in 0..5 {
        let mark = HistogramMark {
            edges: vec![edge as f64 * 4.0, (edge + 1) as f64 * 4.0],
            heights: vec![40.0],
            kind: HistogramKind::Bar,
            color: Some(Color::rgb(255, 0, 0)),
            edge_color: Color::BLACK,
            edge_width: 0.0,
            alpha: 0.8,
            label: None,
        };
        r.add_histogram(&mark).unwrap();
    }
    let (px, w, h, stride) = r.rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);
    let reddish = px.chunks_exact(4).filter(|p| p[0] > 200 && p[1] < 100 && p[2] < 100).count();
    assert!(reddish > 1000, "bars should cover a visible area, got {reddish} pixels");
    r.close_figure();
}

#[test]
fn rgba_buffer_has_opaque_white_background() {
    let mut r = SkiaRenderer::new();
    r.create_figure(&FigureSpec::scaled(0.5, FontFamily::SansSerif)).unwrap();
    let mark = LineMark {
        data: wave(10, 0.0),
        color: None,
        line_style: LineStyle::Solid,
        line_width: 2.0,
        marker: Marker::Circle,
        marker_size: 6.0,
        label: Some("wave".into()),
    };
    let handle = r.add_line(AxisGroup::Left, &mark).unwrap();
    r.configure_axis(AxisId::X, &AxisStyle { limits: [Some(0.0), Some(3.0)], ..AxisStyle::default() }).unwrap();
    r.set_legend(&Legend {
        entries: vec![LegendEntry { handle, label: "wave".into() }],
        loc: LegendLoc::default(),
        font_size: 10.0,
        frame: true,
    })
    .unwrap();

    let (px, w, h, _) = r.rgba8().unwrap();
    assert_eq!((w, h), (320, 240));
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
    r.close_figure();
    assert!(r.rgba8().is_err(), "no figure after close");
}

#[test]
fn scaled_figure_and_png_bytes() {
    let mut r = SkiaRenderer::new();
    r.create_figure(&FigureSpec::scaled(2.0, FontFamily::Serif)).unwrap();
    let bytes = r.png_bytes().unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (1280, 960));
    assert!(r.create_figure(&FigureSpec::default()).is_err(), "one figure at a time");
    r.close_figure();
    r.close_figure();
}

#[test]
fn legend_must_reference_known_marks() {
    let mut r = SkiaRenderer::new();
    r.create_figure(&FigureSpec::default()).unwrap();
    let legend = Legend {
        entries: vec![LegendEntry { handle: MarkId(7), label: "ghost".into() }],
        loc: LegendLoc::default(),
        font_size: 18.0,
        frame: true,
    };
    assert!(r.set_legend(&legend).is_err());
    r.close_figure();
}
