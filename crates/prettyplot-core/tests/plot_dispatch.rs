// File: crates/prettyplot-core/tests/plot_dispatch.rs
// Purpose: Call order and resolved marks produced by `single_plot` against a recording renderer.

use prettyplot_core::render::{AxisId, AxisScale, Call, LabelAnchor, Orientation, ReferenceLineStyle};
use prettyplot_core::{
    single_plot, AxisGroup, AxisValue, Color, LineStyle, Marker, OutputParams, PlotError, PlotParams,
    RecordingRenderer, SeriesSet, StyleValue, XYData,
};

fn series(n: usize) -> XYData {
    XYData::from_points(&(0..n).map(|i| (i as f64, (i * i) as f64)).collect::<Vec<_>>())
}

fn quiet() -> OutputParams {
    OutputParams { show: false, ..OutputParams::default() }
}

fn color(s: &str) -> Color {
    s.parse().unwrap()
}

#[test]
fn calls_follow_the_fixed_order() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Single(vec![series(3), series(4)]),
        legend_labels: Some(StyleValue::PerSeries(vec!["a".into(), "b".into()])),
        vlines: vec![1.0],
        output: OutputParams { filename: Some("out.svg".into()), show: true, ..OutputParams::default() },
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    assert_eq!(
        r.call_names(),
        vec![
            "create_figure",
            "add_line",
            "add_line",
            "add_reference_line",
            "configure_axis",
            "configure_axis",
            "configure_axis",
            "set_legend",
            "set_decorations",
            "export",
            "show",
            "close_figure",
        ]
    );
    assert!(!r.is_open());
}

#[test]
fn dual_axis_per_group_colors() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![series(2), series(2)], vec![series(2)]),
        colors: Some(StyleValue::PerGroup(vec![color("blue"), color("green")], vec![color("black")])),
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    let lines: Vec<_> = r.lines().map(|(g, m)| (g, m.color)).collect();
    assert_eq!(
        lines,
        vec![
            (AxisGroup::Left, Some(color("blue"))),
            (AxisGroup::Left, Some(color("green"))),
            (AxisGroup::Right, Some(color("black"))),
        ]
    );
}

#[test]
fn flat_list_routes_first_left_count_to_the_left() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![series(2), series(2)], vec![series(2)]),
        markers: Some(StyleValue::PerSeries(vec![Marker::Circle, Marker::Square, Marker::Star])),
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    let markers: Vec<_> = r.lines().map(|(g, m)| (g, m.marker)).collect();
    assert_eq!(
        markers,
        vec![(AxisGroup::Left, Marker::Circle), (AxisGroup::Left, Marker::Square), (AxisGroup::Right, Marker::Star)]
    );
}

#[test]
fn shape_error_leaves_no_figure_behind() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![series(2), series(2)], vec![series(2)]),
        colors: Some(StyleValue::PerGroup(vec![color("red")], vec![color("blue")])),
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    let err = single_plot(&mut r, &params).unwrap_err();
    assert!(matches!(err, PlotError::ShapeMismatch { option: "colors", group: AxisGroup::Left, .. }));
    assert!(r.calls().is_empty());
}

#[test]
fn failed_export_still_closes_the_figure() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Single(vec![series(3)]),
        output: OutputParams { filename: Some("x.png".into()), ..quiet() },
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::failing_export();
    assert!(matches!(single_plot(&mut r, &params), Err(PlotError::Render(_))));
    assert_eq!(r.call_names().last(), Some(&"close_figure"));
    assert!(!r.is_open());
}

#[test]
fn scatter_groups_draw_markers_without_lines() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![series(2)], vec![series(2)]),
        scatterplot: AxisValue::Split(true, false),
        linestyles: Some(StyleValue::Scalar(LineStyle::Dashed)),
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    let marks: Vec<_> = r.lines().map(|(_, m)| (m.line_style, m.marker)).collect();
    assert_eq!(marks, vec![(LineStyle::None, Marker::Circle), (LineStyle::Dashed, Marker::None)]);
}

#[test]
fn right_axis_mirrors_left_without_right_series() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Single(vec![series(3)]),
        y_label: AxisValue::Both("left only".into()),
        y_log_scale: AxisValue::Both(true),
        linewidth: 3.0,
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    let left = r.axis(AxisId::Y(AxisGroup::Left)).unwrap();
    let right = r.axis(AxisId::Y(AxisGroup::Right)).unwrap();
    assert_eq!(left.label, "left only");
    assert_eq!(left.scale, AxisScale::Log10);
    assert!(right.mirror_left && !right.show_tick_labels);
    assert!(right.label.is_empty());
    assert_eq!(left.tick_width, 2.0);
    assert!(r.axis(AxisId::X).unwrap().both_sides);
}

#[test]
fn split_options_configure_each_y_axis() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![series(2)], vec![series(2)]),
        y_label: AxisValue::Split("volts".into(), "amps".into()),
        y_lims: AxisValue::Split([Some(0.0), Some(1.0)], [None, Some(5.0)]),
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    let right = r.axis(AxisId::Y(AxisGroup::Right)).unwrap();
    assert_eq!(right.label, "amps");
    assert_eq!(right.limits, [None, Some(5.0)]);
    assert!(!right.mirror_left);
}

#[test]
fn legend_only_when_labels_are_given() {
    let mut params = PlotParams { xy_data_sets: SeriesSet::Single(vec![series(2)]), output: quiet(), ..PlotParams::default() };
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    assert!(r.legend().is_none());

    params.legend_labels = Some(StyleValue::Scalar("data".into()));
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    let legend = r.legend().unwrap();
    assert_eq!(legend.entries.len(), 1);
    assert_eq!(legend.entries[0].label, "data");
    assert_eq!(legend.entries[0].handle, 1);
}

#[test]
fn grid_figure_label_and_reference_styles() {
    let style = ReferenceLineStyle { color: Color::BLACK, linestyle: LineStyle::Dotted, ..ReferenceLineStyle::default() };
    let mut params = PlotParams {
        xy_data_sets: SeriesSet::Single(vec![series(2)]),
        grid_linewidth: 1.5,
        hlines: vec![0.5, 0.7],
        hline_styles: Some(StyleValue::Scalar(style)),
        output: quiet(),
        ..PlotParams::default()
    };
    params.figure.fig_label = "(a)".into();
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();

    let deco = r.decorations().unwrap();
    assert_eq!(deco.grid, Some(1.5));
    let label = deco.fig_label.as_ref().unwrap();
    assert_eq!(label.position, PlotParams::FIG_LABEL_COORDS);
    assert_eq!(label.anchor, LabelAnchor::Axes);

    let lines: Vec<_> = r.reference_lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.orientation == Orientation::Horizontal && l.style == style));
}

#[test]
fn mismatched_reference_styles_are_rejected() {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Single(vec![series(2)]),
        vlines: vec![1.0, 2.0],
        vline_styles: Some(StyleValue::PerSeries(vec![ReferenceLineStyle::default()])),
        output: quiet(),
        ..PlotParams::default()
    };
    let mut r = RecordingRenderer::new();
    assert!(single_plot(&mut r, &params).unwrap_err().is_configuration());
    assert!(r.calls().is_empty());
}

#[test]
fn figure_is_scaled_and_uses_the_requested_font() {
    let mut params = PlotParams { xy_data_sets: SeriesSet::Single(vec![series(2)]), output: quiet(), ..PlotParams::default() };
    params.figure.scale = 2.0;
    params.figure.font_family = prettyplot_core::FontFamily::SansSerif;
    let mut r = RecordingRenderer::new();
    single_plot(&mut r, &params).unwrap();
    match &r.calls()[0] {
        Call::CreateFigure(spec) => {
            assert_eq!((spec.width_px(), spec.height_px()), (1280, 960));
            assert_eq!(spec.font_family, prettyplot_core::FontFamily::SansSerif);
        }
        other => panic!("first call was {}", other.name()),
    }
}
