// File: crates/prettyplot-core/src/dispatch/imshow.rs
// Summary: `single_imshow`: a colormapped grid with a colorbar, row 0 on top.

use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::params::ImshowParams;
use crate::render::{
    AxisId, AxisStyle, Colorbar, Decorations, FigureGuard, FigureSpec, ImageMark, LabelAnchor,
    Orientation, ReferenceLine, Renderer, TickDirection,
};
use crate::route::AxisGroup;

use super::{figure_label, finish};

/// Draw `params.z` as an image with a colorbar and export/show the figure.
pub fn single_imshow<R: Renderer + ?Sized>(renderer: &mut R, params: &ImshowParams) -> PlotResult<()> {
    params.validate()?;
    let z = &params.z;
    if z.is_empty() {
        return Err(PlotError::DegenerateData("image grid is empty".into()));
    }
    let (vmin, vmax) = color_range(params)?;
    debug!(rows = z.rows(), cols = z.cols(), vmin, vmax, cmap = %params.cmap, "single_imshow");

    let (xticks, xticklabels) =
        ticks_with_labels("xticklabels", params.xticks.as_ref(), params.xticklabels.as_ref(), z.cols())?;
    let (yticks, yticklabels) =
        ticks_with_labels("yticklabels", params.yticks.as_ref(), params.yticklabels.as_ref(), z.rows())?;
    if let (Some(ticks), Some(labels)) = (&params.cbticks, &params.cbticklabels) {
        check_labels("cbticklabels", ticks.len(), labels.len())?;
    } else if params.cbticklabels.is_some() {
        return Err(PlotError::invalid("cbticklabels", "labels need explicit `cbticks`"));
    }

    let image = ImageMark {
        grid: z.clone(),
        colormap: params.cmap,
        vmin,
        vmax,
        interpolation: params.interpolation,
    };
    let base = AxisStyle {
        label_size: params.xy_label_ft_size,
        tick_label_size: params.tick_label_ft_size,
        direction: TickDirection::Out,
        minor_ticks: false,
        ..AxisStyle::default()
    };
    let x = AxisStyle {
        label: params.x_label.clone(),
        limits: [Some(-0.5), Some(z.cols() as f64 - 0.5)],
        ticks: Some(xticks),
        tick_labels: Some(xticklabels),
        major_len: params.xtick_len,
        tick_width: params.xtick_width,
        ..base.clone()
    };
    let y = AxisStyle {
        label: params.y_label.clone(),
        // Inverted so that row 0 is drawn on top.
        limits: [Some(z.rows() as f64 - 0.5), Some(-0.5)],
        ticks: Some(yticks),
        tick_labels: Some(yticklabels),
        major_len: params.ytick_len,
        tick_width: params.ytick_width,
        ..base
    };
    let colorbar = Colorbar {
        side: params.colorbar.position,
        size: params.colorbar.size,
        pad: params.colorbar.pad,
        label: params.colorbar.label.clone(),
        ticks: params.cbticks.clone(),
        tick_labels: params.cbticklabels.clone(),
        tick_label_size: params.tick_label_ft_size,
        tick_len: params.cbtick_len,
        tick_width: params.cbtick_width,
        outline_width: params.frame_thickness,
    };
    let reference_lines: Vec<ReferenceLine> = params
        .vlines
        .iter()
        .map(|&position| ReferenceLine { orientation: Orientation::Vertical, position, style: params.vline_style })
        .chain(params.hlines.iter().map(|&position| ReferenceLine {
            orientation: Orientation::Horizontal,
            position,
            style: params.hline_style,
        }))
        .collect();
    let decorations = Decorations {
        title: params.figure.title.clone(),
        title_size: params.figure.title_ft_size,
        fig_label: figure_label(&params.figure, ImshowParams::FIG_LABEL_COORDS, LabelAnchor::Figure),
        grid: None,
        spine_width: params.frame_thickness,
        aspect: params.figure.aspect,
    };
    let spec = FigureSpec::scaled(params.figure.scale, params.figure.font_family);

    let mut fig = FigureGuard::open(renderer, &spec)?;
    fig.add_image(&image)?;
    fig.set_colorbar(&colorbar)?;
    for line in &reference_lines {
        fig.add_reference_line(line)?;
    }
    fig.configure_axis(AxisId::X, &x)?;
    fig.configure_axis(AxisId::Y(AxisGroup::Left), &y)?;
    fig.set_decorations(&decorations)?;
    finish(&mut fig, &params.output)
}

/// Colormap range: `norm` where given, the finite data range otherwise.
fn color_range(params: &ImshowParams) -> PlotResult<(f64, f64)> {
    let data = params.z.finite_range();
    let [lo, hi] = params.norm;
    let (vmin, vmax) = match (lo, hi, data) {
        (Some(lo), Some(hi), _) => (lo, hi),
        (lo, hi, Some((dmin, dmax))) => (lo.unwrap_or(dmin), hi.unwrap_or(dmax)),
        (_, _, None) => {
            return Err(PlotError::DegenerateData("image grid has no finite values".into()));
        }
    };
    if vmin > vmax {
        return Err(PlotError::invalid("norm", format!("vmin {vmin} exceeds vmax {vmax}")));
    }
    Ok((vmin, vmax))
}

/// Explicit ticks or one per cell; labels must match, default blank.
fn ticks_with_labels(
    option: &'static str,
    ticks: Option<&Vec<f64>>,
    labels: Option<&Vec<String>>,
    cells: usize,
) -> PlotResult<(Vec<f64>, Vec<String>)> {
    let ticks = ticks.cloned().unwrap_or_else(|| (0..cells).map(|i| i as f64).collect());
    let labels = match labels {
        Some(labels) => {
            check_labels(option, ticks.len(), labels.len())?;
            labels.clone()
        }
        None => vec![String::new(); ticks.len()],
    };
    Ok((ticks, labels))
}

fn check_labels(option: &'static str, ticks: usize, labels: usize) -> PlotResult<()> {
    if ticks == labels {
        Ok(())
    } else {
        Err(PlotError::invalid(option, format!("{labels} labels for {ticks} ticks")))
    }
}
