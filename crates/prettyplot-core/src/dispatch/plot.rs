// File: crates/prettyplot-core/src/dispatch/plot.rs
// Summary: `single_plot`: line/scatter series on a left and an optional right y-axis.

use tracing::{debug, trace};

use crate::data::XYData;
use crate::error::PlotResult;
use crate::normalize::{resolve_optional, resolve_or, AxisValue};
use crate::params::PlotParams;
use crate::render::{
    AxisId, AxisScale, AxisStyle, Decorations, FigureGuard, FigureSpec, LabelAnchor, LineMark,
    Orientation, ReferenceLine, ReferenceLineStyle, Renderer, TickDirection,
};
use crate::route::{AxisGroup, GroupSizes};
use crate::style::{LineStyle, Marker};

use super::{figure_label, finish, legend, legend_entries, tick_width};

/// Draw `params.xy_data_sets` as lines or scatter points and export/show the figure.
///
/// Series in the second group of a `SeriesSet::Dual` are plotted against a right
/// y-axis. Without right series the right axis mirrors the left one's ticks
/// without labels.
pub fn single_plot<R: Renderer + ?Sized>(renderer: &mut R, params: &PlotParams) -> PlotResult<()> {
    params.validate()?;
    let sizes = params.xy_data_sets.sizes();
    debug!(left = sizes.left, right = sizes.right, "single_plot: resolving options");

    let marks = line_marks(params, sizes)?;
    let reference_lines = reference_lines(params)?;
    let axes = axis_styles(params, sizes);
    let tw = tick_width(params.linewidth);
    let decorations = Decorations {
        title: params.figure.title.clone(),
        title_size: params.figure.title_ft_size,
        fig_label: figure_label(&params.figure, PlotParams::FIG_LABEL_COORDS, LabelAnchor::Axes),
        grid: (params.grid_linewidth != 0.0).then_some(params.grid_linewidth),
        spine_width: tw,
        aspect: params.figure.aspect,
    };
    let spec = FigureSpec::scaled(params.figure.scale, params.figure.font_family);

    let mut fig = FigureGuard::open(renderer, &spec)?;
    let mut labelled = Vec::with_capacity(marks.len());
    for (group, mark) in &marks {
        trace!(%group, points = mark.data.len(), "add_line");
        let handle = fig.add_line(*group, mark)?;
        labelled.push((handle, mark.label.clone()));
    }
    for line in &reference_lines {
        fig.add_reference_line(line)?;
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

fn line_marks(params: &PlotParams, sizes: GroupSizes) -> PlotResult<Vec<(AxisGroup, LineMark)>> {
    let colors = resolve_optional(params.colors.as_ref(), "colors", sizes)?;
    let markers = resolve_optional(params.markers.as_ref(), "markers", sizes)?;
    let linestyles = resolve_or(params.linestyles.as_ref(), "linestyles", sizes, LineStyle::Solid)?;
    let labels = resolve_optional(params.legend_labels.as_ref(), "legend_labels", sizes)?;

    Ok(params
        .xy_data_sets
        .route()
        .map(|r| {
            let (g, i) = (r.group, r.index);
            let marker = markers.group(g)[i];
            let mark = if params.scatterplot.get(g) {
                scatter_mark(r.series, marker, params)
            } else {
                LineMark {
                    data: r.series.clone(),
                    color: None,
                    line_style: linestyles.group(g)[i],
                    line_width: params.linewidth,
                    marker: marker.unwrap_or(Marker::None),
                    marker_size: params.markersize,
                    label: None,
                }
            };
            let mark = LineMark { color: colors.group(g)[i], label: labels.group(g)[i].clone(), ..mark };
            (g, mark)
        })
        .collect())
}

/// Markers only; a scatter group without an explicit marker uses circles.
fn scatter_mark(data: &XYData, marker: Option<Marker>, params: &PlotParams) -> LineMark {
    LineMark {
        data: data.clone(),
        color: None,
        line_style: LineStyle::None,
        line_width: params.linewidth,
        marker: marker.unwrap_or(Marker::Circle),
        marker_size: params.markersize,
        label: None,
    }
}

fn reference_lines(params: &PlotParams) -> PlotResult<Vec<ReferenceLine>> {
    let mut out = Vec::with_capacity(params.vlines.len() + params.hlines.len());
    for (option, positions, styles, orientation) in [
        ("vline_styles", &params.vlines, &params.vline_styles, Orientation::Vertical),
        ("hline_styles", &params.hlines, &params.hline_styles, Orientation::Horizontal),
    ] {
        let sizes = GroupSizes::single(positions.len());
        let styles = resolve_or(styles.as_ref(), option, sizes, ReferenceLineStyle::default())?;
        out.extend(
            positions
                .iter()
                .zip(&styles.left)
                .map(|(&position, &style)| ReferenceLine { orientation, position, style }),
        );
    }
    Ok(out)
}

fn axis_styles(params: &PlotParams, sizes: GroupSizes) -> Vec<(AxisId, AxisStyle)> {
    let ticks = &params.ticks;
    let tw = tick_width(params.linewidth);
    let scale = |log: bool| if log { AxisScale::Log10 } else { AxisScale::Linear };
    let base = AxisStyle {
        label_size: params.xy_label_ft_size,
        tick_label_size: ticks.tick_label_ft_size,
        tick_width: tw,
        direction: TickDirection::In,
        minor_ticks: true,
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
        both_sides: true,
        ..base.clone()
    };

    let y = |group: AxisGroup, label: String| AxisStyle {
        label,
        scale: scale(params.y_log_scale.get(group)),
        limits: params.y_lims.get(group),
        major_spacing: ticks.major_ytick_spacing.as_ref().map(|s| s.get(group)),
        minor_spacing: ticks.minor_ytick_spacing.as_ref().map(|s| s.get(group)),
        major_len: ticks.major_ytick_len,
        minor_len: ticks.minor_ytick_len,
        ..base.clone()
    };

    let left = y(AxisGroup::Left, params.y_label.left());
    let right = if sizes.right == 0 {
        AxisStyle { label: String::new(), show_tick_labels: false, mirror_left: true, ..left.clone() }
    } else {
        let label = match &params.y_label {
            AxisValue::Both(_) => String::new(),
            AxisValue::Split(_, right) => right.clone(),
        };
        y(AxisGroup::Right, label)
    };

    vec![(AxisId::X, x), (AxisId::Y(AxisGroup::Left), left), (AxisId::Y(AxisGroup::Right), right)]
}
