// File: crates/prettyplot-core/src/template.rs
// Summary: Ready-to-edit JSON parameter files pre-filled with every option at its default.

use crate::data::{Grid, XData, XYData};
use crate::error::PlotResult;
use crate::params::{HistParams, ImshowParams, PlotParams};
use crate::route::SeriesSet;

/// JSON template for `single_plot` with one small series in place of real data.
pub fn plot_template() -> PlotResult<String> {
    let params = PlotParams {
        xy_data_sets: SeriesSet::Single(vec![XYData::from_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)])]),
        grid_linewidth: 2.0,
        ..PlotParams::default()
    };
    Ok(serde_json::to_string_pretty(&params)?)
}

/// JSON template for `single_imshow` with a 2 x 2 grid in place of real data.
pub fn imshow_template() -> PlotResult<String> {
    let params = ImshowParams::new(Grid::from_fn(2, 2, |r, c| (r * 2 + c) as f64));
    Ok(serde_json::to_string_pretty(&params)?)
}

/// JSON template for `single_hist` with one short sample in place of real data.
pub fn hist_template() -> PlotResult<String> {
    let params = HistParams::new(vec![XData::new(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0])]);
    Ok(serde_json::to_string_pretty(&params)?)
}
