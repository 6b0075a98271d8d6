// File: crates/prettyplot-core/tests/hist_dispatch.rs
// Purpose: Fill/outline passes, cumulative steps and option checks of `single_hist`.

use approx::assert_relative_eq;
use prettyplot_core::render::{AxisId, AxisScale, HistogramKind};
use prettyplot_core::{
    single_hist, AxisGroup, Bins, Color, Cumulative, HistParams, OutputParams, PlotError,
    RecordingRenderer, StyleValue, XData,
};

fn params(sets: Vec<Vec<f64>>) -> HistParams {
    HistParams {
        x_data_sets: sets.into_iter().map(XData::new).collect(),
        output: OutputParams { show: false, ..OutputParams::default() },
        ..HistParams::default()
    }
}

#[test]
fn bars_then_black_outlines() {
    let p = HistParams {
        bins: Bins::Count(3),
        colors: Some(StyleValue::Scalar(Color::rgb(255, 0, 0))),
        legend_labels: Some(vec!["a".into(), "b".into()]),
        ..params(vec![vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0], vec![0.0, 4.0]])
    };
    let mut r = RecordingRenderer::new();
    single_hist(&mut r, &p).unwrap();

    let marks: Vec<_> = r.histograms().collect();
    assert_eq!(marks.len(), 4);
    let kinds: Vec<_> = marks.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![HistogramKind::Bar, HistogramKind::Bar, HistogramKind::Outline, HistogramKind::Outline]);

    assert_eq!(marks[0].heights, vec![1.0, 2.0, 3.0]);
    assert_eq!(marks[0].color, Some(Color::rgb(255, 0, 0)));
    assert_relative_eq!(marks[0].alpha, 0.8);
    assert_eq!(marks[0].edge_width, 0.0);

    let outline = marks[2];
    assert_eq!(outline.edge_color, Color::BLACK);
    assert_eq!(outline.edge_width, 2.0);
    assert_eq!(outline.alpha, 1.0);
    assert!(outline.label.is_none());

    // Legend covers the labelled fills only.
    assert_eq!(r.legend().unwrap().entries.len(), 2);
}

#[test]
fn cumulative_histograms_are_single_step_marks() {
    let p = HistParams { bins: Bins::Count(3), cumulative: Cumulative::Reverse, ..params(vec![vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0]]) };
    let mut r = RecordingRenderer::new();
    single_hist(&mut r, &p).unwrap();
    let marks: Vec<_> = r.histograms().collect();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].kind, HistogramKind::Step);
    assert_eq!(marks[0].heights, vec![6.0, 5.0, 3.0]);
    assert_eq!(marks[0].edge_width, 2.0);
}

#[test]
fn per_series_alphas_and_single_y_axis() {
    let p = HistParams {
        alphas: StyleValue::PerSeries(vec![0.2, 0.6]),
        y_log_scale: true,
        ..params(vec![vec![1.0, 2.0], vec![1.0, 3.0]])
    };
    let mut r = RecordingRenderer::new();
    single_hist(&mut r, &p).unwrap();
    let alphas: Vec<_> = r.histograms().take(2).map(|m| m.alpha).collect();
    assert_eq!(alphas, vec![0.2, 0.6]);
    assert!(r.axis(AxisId::Y(AxisGroup::Right)).is_none());
    assert!(r.axis(AxisId::Y(AxisGroup::Left)).unwrap().both_sides);
}

#[test]
fn zero_range_series_fails_before_drawing() {
    let mut r = RecordingRenderer::new();
    let err = single_hist(&mut r, &params(vec![vec![1.0, 2.0], vec![5.0, 5.0]])).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateData(_)));
    assert!(r.calls().is_empty());
}

#[test]
fn wrong_number_of_colors_or_labels() {
    let p = HistParams {
        colors: Some(StyleValue::PerSeries(vec![Color::BLACK])),
        ..params(vec![vec![1.0, 2.0], vec![1.0, 3.0]])
    };
    assert!(single_hist(&mut RecordingRenderer::new(), &p).unwrap_err().is_configuration());

    let p = HistParams { legend_labels: Some(vec!["only one".into()]), ..params(vec![vec![1.0, 2.0], vec![1.0, 3.0]]) };
    assert!(matches!(
        single_hist(&mut RecordingRenderer::new(), &p),
        Err(PlotError::ShapeMismatch { option: "legend_labels", expected: 2, found: 1, .. })
    ));
}

#[test]
fn normalized_histogram_is_a_density() {
    let p = HistParams { bins: Bins::Edges(vec![0.0, 1.0, 3.0]), normalized: true, ..params(vec![vec![0.5, 1.5, 2.5, 2.9]]) };
    let mut r = RecordingRenderer::new();
    single_hist(&mut r, &p).unwrap();
    let fill = r.histograms().next().unwrap();
    assert_relative_eq!(fill.heights[0], 0.25);
    assert_relative_eq!(fill.heights[1], 0.375);
}

#[test]
fn log_x_edges_reach_fills_and_outlines() {
    let p = HistParams {
        bins: Bins::Count(3),
        x_log_scale: true,
        ..params(vec![vec![1.0, 2.0, 20.0, 500.0, 1000.0]])
    };
    let mut r = RecordingRenderer::new();
    single_hist(&mut r, &p).unwrap();

    let marks: Vec<_> = r.histograms().collect();
    assert_eq!(marks.len(), 2);
    for mark in &marks {
        assert_eq!(mark.edges.len(), 4);
        assert_eq!(mark.edges[0], 1.0);
        assert_relative_eq!(mark.edges[1], 10.0, epsilon = 1e-9);
        assert_relative_eq!(mark.edges[2], 100.0, epsilon = 1e-9);
        assert_eq!(mark.edges[3], 1000.0);
    }
    assert_eq!(marks[0].heights, vec![2.0, 1.0, 2.0]);
    assert_eq!(r.axis(AxisId::X).unwrap().scale, AxisScale::Log10);
}

#[test]
fn repeated_edges_fail_before_drawing() {
    let p = HistParams {
        bins: Bins::Edges(vec![0.0, 1.0, 1.0, 2.0]),
        normalized: true,
        ..params(vec![vec![0.5, 1.0, 1.5]])
    };
    let mut r = RecordingRenderer::new();
    let err = single_hist(&mut r, &p).unwrap_err();
    assert!(err.is_configuration());
    assert!(r.calls().is_empty());
}
