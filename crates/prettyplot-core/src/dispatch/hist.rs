// File: crates/prettyplot-core/src/dispatch/hist.rs
// Summary: `single_hist`: one or more histograms sharing bins settings, with opaque bar outlines.

use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{PlotError, PlotResult};
use crate::histogram::{bin_edges, heights};
use crate::normalize::{resolve_optional, AxisValue};
use crate::params::HistParams;
use crate::render::{
    AxisId, AxisScale, AxisStyle, Decorations, FigureGuard, FigureSpec, HistogramKind,
    HistogramMark, LabelAnchor, Renderer, TickDirection,
};
use crate::route::{AxisGroup, GroupSizes};

use super::{figure_label, finish, legend, legend_entries, tick_width};

/// Bin every series of `params.x_data_sets` and draw the histograms.
///
/// Non-cumulative histograms are drawn as translucent filled bars followed by
/// one black outline pass per series; cumulative ones as step outlines.
pub fn single_hist<R: Renderer + ?Sized>(renderer: &mut R, params: &HistParams) -> PlotResult<()> {
    params.validate()?;
    let n = params.x_data_sets.len();
    let sizes = GroupSizes::single(n);
    debug!(series = n, bins = ?params.bins, cumulative = ?params.cumulative, "single_hist: binning");

    let colors = resolve_optional(params.colors.as_ref(), "colors", sizes)?;
    let alphas = params.alphas.resolve("alphas", sizes)?;
    if let Some(labels) = &params.legend_labels {
        if labels.len() != n {
            return Err(PlotError::ShapeMismatch {
                option: "legend_labels",
                group: AxisGroup::Left,
                expected: n,
                found: labels.len(),
            });
        }
    }

    let mut fills = Vec::with_capacity(n);
    let mut outlines = Vec::new();
    for (i, series) in params.x_data_sets.iter().enumerate() {
        let edges = bin_edges(series.x(), &params.bins, params.x_log_scale)?;
        let values = heights(series.x(), &edges, params.normalized, params.cumulative);
        let label = params.legend_labels.as_ref().map(|l| l[i].clone());
        let (kind, edge_width) = if params.cumulative.is_on() {
            (HistogramKind::Step, params.bar_edge_width)
        } else {
            (HistogramKind::Bar, 0.0)
        };
        fills.push(HistogramMark {
            edges: edges.clone(),
            heights: values.clone(),
            kind,
            color: colors.left[i],
            edge_color: Color::BLACK,
            edge_width,
            alpha: alphas.left[i],
            label,
        });
        if !params.cumulative.is_on() {
            // Outlines are unlabeled and opaque so translucent bars keep crisp edges.
            outlines.push(HistogramMark {
                edges,
                heights: values,
                kind: HistogramKind::Outline,
                color: None,
                edge_color: Color::BLACK,
                edge_width: params.bar_edge_width,
                alpha: 1.0,
                label: None,
            });
        }
    }

    let axes = axis_styles(params);
    let decorations = Decorations {
        title: params.figure.title.clone(),
        title_size: params.figure.title_ft_size,
        fig_label: figure_label(&params.figure, HistParams::FIG_LABEL_COORDS, LabelAnchor::Axes),
        grid: None,
        spine_width: tick_width(params.axes_linewidth),
        aspect: params.figure.aspect,
    };
    let spec = FigureSpec::scaled(params.figure.scale, params.figure.font_family);

    let mut fig = FigureGuard::open(renderer, &spec)?;
    let mut labelled = Vec::with_capacity(fills.len());
    for mark in &fills {
        trace!(bins = mark.heights.len(), kind = ?mark.kind, "add_histogram");
        let handle = fig.add_histogram(mark)?;
        labelled.push((handle, mark.label.clone()));
    }
    for mark in &outlines {
        fig.add_histogram(mark)?;
    }
    for (axis, style) in &axes {
        fig.configure_axis(*axis, style)?;
    }
    if params.legend_labels.is_some() {
        fig.set_legend(&legend(legend_entries(labelled), &params.legend))?;
    }
    fig.set_decorations(&decorations)?;
    finish(&mut fig, &params.output)
}

fn axis_styles(params: &HistParams) -> Vec<(AxisId, AxisStyle)> {
    let ticks = &params.ticks;
    let scale = |log: bool| if log { AxisScale::Log10 } else { AxisScale::Linear };
    let base = AxisStyle {
        label_size: params.xy_label_ft_size,
        tick_label_size: ticks.tick_label_ft_size,
        tick_width: tick_width(params.axes_linewidth),
        direction: TickDirection::In,
        minor_ticks: true,
        both_sides: true,
        ..AxisStyle::default()
    };
    let x = AxisStyle {
        label: params.x_label.clone(),
        scale: scale(params.x_log_scale),
        limits: params.x_lims,
        major_spacing: ticks.major_xtick_spacing,
        minor_spacing: ticks.minor_xtick_spacing,
        major_len: ticks.major_xtick_len,
        minor_len: ticks.minor_xtick_len,
        ..base.clone()
    };
    let y = AxisStyle {
        label: params.y_label.clone(),
        scale: scale(params.y_log_scale),
        limits: params.y_lims,
        major_spacing: ticks.major_ytick_spacing.as_ref().map(AxisValue::left),
        minor_spacing: ticks.minor_ytick_spacing.as_ref().map(AxisValue::left),
        major_len: ticks.major_ytick_len,
        minor_len: ticks.minor_ytick_len,
        ..base
    };
    vec![(AxisId::X, x), (AxisId::Y(AxisGroup::Left), y)]
}
