// File: crates/prettyplot-core/src/dispatch/mod.rs
// Summary: Draw dispatcher; turns parameter objects into an ordered sequence of renderer calls.
// Notes:
// - Each entry point resolves and checks everything first, then opens the
//   figure. A configuration or data error therefore never leaves a partial
//   figure behind, and the figure guard closes the figure on any later error.

mod hist;
mod imshow;
mod plot;

pub use hist::single_hist;
pub use imshow::single_imshow;
pub use plot::single_plot;

use tracing::debug;

use crate::error::PlotResult;
use crate::params::{FigureParams, OutputParams};
use crate::render::{FigureGuard, FigureLabel, LabelAnchor, Legend, LegendEntry, Renderer};

/// Two thirds of the characteristic line width, used for ticks and spines.
pub(crate) fn tick_width(linewidth: f64) -> f64 {
    2.0 * linewidth / 3.0
}

pub(crate) fn figure_label(
    figure: &FigureParams,
    default_coords: (f64, f64),
    anchor: LabelAnchor,
) -> Option<FigureLabel> {
    if figure.fig_label.is_empty() {
        return None;
    }
    Some(FigureLabel {
        text: figure.fig_label.clone(),
        position: figure.fig_label_coords.unwrap_or(default_coords),
        size: figure.fig_label_ft_size,
        anchor,
    })
}

/// Pair mark handles with their labels, skipping unlabeled marks.
pub(crate) fn legend_entries<H>(labelled: Vec<(H, Option<String>)>) -> Vec<LegendEntry<H>> {
    labelled
        .into_iter()
        .filter_map(|(handle, label)| label.map(|label| LegendEntry { handle, label }))
        .collect()
}

pub(crate) fn legend<H>(entries: Vec<LegendEntry<H>>, params: &crate::params::LegendParams) -> Legend<H> {
    Legend { entries, loc: params.legend_loc, font_size: params.legend_ft_size, frame: true }
}

/// Export (when a filename is set) and show (when requested) the open figure.
pub(crate) fn finish<R: Renderer + ?Sized>(
    fig: &mut FigureGuard<'_, R>,
    output: &OutputParams,
) -> PlotResult<()> {
    if let Some(path) = &output.filename {
        debug!(path = %path.display(), format = %output.img_fmt, "exporting figure");
        fig.export(path, output.img_fmt)?;
    }
    if output.show {
        fig.show()?;
    }
    Ok(())
}
