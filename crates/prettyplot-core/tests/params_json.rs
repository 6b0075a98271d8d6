// File: crates/prettyplot-core/tests/params_json.rs
// Purpose: JSON parameter files: partial option bags, shape inference, templates.

use prettyplot_core::template::{hist_template, imshow_template, plot_template};
use prettyplot_core::{
    AxisValue, Bins, Cumulative, HistParams, ImageFormat, ImshowParams, LegendLoc, LegendPosition,
    Marker, PlotParams, SeriesSet, StyleValue,
};

#[test]
fn partial_plot_file_keeps_defaults() {
    let p: PlotParams = serde_json::from_str(
        r#"{
            "xy_data_sets": [{"x": [0, 1], "y": [1, 2]}, {"x": [0], "y": [3]}],
            "markers": "o",
            "title": "demo",
            "img_fmt": "png"
        }"#,
    )
    .unwrap();
    assert!(matches!(p.xy_data_sets, SeriesSet::Single(ref v) if v.len() == 2));
    assert_eq!(p.markers, Some(StyleValue::Scalar(Marker::Circle)));
    assert_eq!(p.figure.title, "demo");
    assert_eq!(p.output.img_fmt, ImageFormat::Png);
    assert_eq!(p.markersize, 11.0);
    assert_eq!(p.legend.legend_loc, LegendLoc::Named(LegendPosition::Best));
}

#[test]
fn nested_series_and_per_axis_options() {
    let p: PlotParams = serde_json::from_str(
        r#"{
            "xy_data_sets": [[{"x": [0], "y": [1]}], [{"x": [0], "y": [2], "yerr": [0.1]}]],
            "colors": [["red"], ["C1"]],
            "scatterplot": [true, false],
            "y_lims": [[0, 1], [null, 10]],
            "y_label": ["left", "right"],
            "major_ytick_spacing": [0.5, 2]
        }"#,
    )
    .unwrap();
    assert_eq!(p.xy_data_sets.sizes().right, 1);
    assert!(matches!(p.colors, Some(StyleValue::PerGroup(..))));
    assert_eq!(p.scatterplot, AxisValue::Split(true, false));
    assert_eq!(p.y_lims, AxisValue::Split([Some(0.0), Some(1.0)], [None, Some(10.0)]));
    assert_eq!(p.ticks.major_ytick_spacing, Some(AxisValue::Split(0.5, 2.0)));
}

#[test]
fn hist_file_accepts_bins_and_cumulative_forms() {
    let p: HistParams =
        serde_json::from_str(r#"{"x_data_sets": [[1, 2, 3]], "bins": [0, 2, 4], "cumulative": -1}"#).unwrap();
    assert_eq!(p.bins, Bins::Edges(vec![0.0, 2.0, 4.0]));
    assert_eq!(p.cumulative, Cumulative::Reverse);
    assert_eq!(p.x_data_sets[0].len(), 3);
}

#[test]
fn ragged_image_is_rejected() {
    assert!(serde_json::from_str::<ImshowParams>(r#"{"z": [[1, 2], [3]]}"#).is_err());
}

#[test]
fn templates_parse_back() {
    let p: PlotParams = serde_json::from_str(&plot_template().unwrap()).unwrap();
    assert_eq!(p.grid_linewidth, 2.0);
    let h: HistParams = serde_json::from_str(&hist_template().unwrap()).unwrap();
    assert_eq!(h, HistParams::new(h.x_data_sets.clone()));
    let i: ImshowParams = serde_json::from_str(&imshow_template().unwrap()).unwrap();
    assert_eq!((i.z.rows(), i.z.cols()), (2, 2));
}
