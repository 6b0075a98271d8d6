// File: crates/prettyplot-core/src/params.rs
// Summary: Parameter objects for `single_plot`, `single_hist` and `single_imshow`, with bounds checks.
// Notes:
// - Every struct is `#[serde(default)]`: a JSON file may give any subset of options.
// - Option groups shared by several figure kinds are flattened, so the JSON
//   keys stay flat (`"title"`, `"major_xtick_len"`, ...).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::data::{Grid, XData, XYData};
use crate::error::{PlotError, PlotResult};
use crate::histogram::{Bins, Cumulative};
use crate::normalize::{AxisValue, StyleValue};
use crate::render::{ColorbarSide, ReferenceLineStyle};
use crate::route::SeriesSet;
use crate::style::{Aspect, Colormap, FontFamily, ImageFormat, Interpolation, LegendLoc, LineStyle, Marker};
use crate::types::Limits;

/// Tick lengths, spacings and label size for the x axis and the y axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickParams {
    pub major_xtick_len: f64,
    pub minor_xtick_len: f64,
    pub major_ytick_len: f64,
    pub minor_ytick_len: f64,
    pub major_xtick_spacing: Option<f64>,
    pub minor_xtick_spacing: Option<f64>,
    /// Per-axis for dual-axis plots; histograms take a single value.
    pub major_ytick_spacing: Option<AxisValue<f64>>,
    pub minor_ytick_spacing: Option<AxisValue<f64>>,
    pub tick_label_ft_size: f64,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            major_xtick_len: 8.0,
            minor_xtick_len: 5.0,
            major_ytick_len: 8.0,
            minor_ytick_len: 5.0,
            major_xtick_spacing: None,
            minor_xtick_spacing: None,
            major_ytick_spacing: None,
            minor_ytick_spacing: None,
            tick_label_ft_size: 18.0,
        }
    }
}

impl TickParams {
    fn validate(&self) -> PlotResult<()> {
        non_negative("major_xtick_len", self.major_xtick_len)?;
        non_negative("minor_xtick_len", self.minor_xtick_len)?;
        non_negative("major_ytick_len", self.major_ytick_len)?;
        non_negative("minor_ytick_len", self.minor_ytick_len)?;
        positive("tick_label_ft_size", self.tick_label_ft_size)?;
        spacing("major_xtick_spacing", self.major_xtick_spacing)?;
        spacing("minor_xtick_spacing", self.minor_xtick_spacing)?;
        for (option, value) in [
            ("major_ytick_spacing", &self.major_ytick_spacing),
            ("minor_ytick_spacing", &self.minor_ytick_spacing),
        ] {
            if let Some(v) = value {
                spacing(option, Some(v.left()))?;
                spacing(option, Some(v.right()))?;
            }
        }
        Ok(())
    }

    fn reject_split(&self) -> PlotResult<()> {
        for (option, value) in [
            ("major_ytick_spacing", &self.major_ytick_spacing),
            ("minor_ytick_spacing", &self.minor_ytick_spacing),
        ] {
            if value.as_ref().is_some_and(AxisValue::is_split) {
                return Err(PlotError::invalid(option, "this figure has a single y-axis"));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendParams {
    pub legend_loc: LegendLoc,
    pub legend_ft_size: f64,
}

impl Default for LegendParams {
    fn default() -> Self {
        Self { legend_loc: LegendLoc::default(), legend_ft_size: 18.0 }
    }
}

/// Title, figure label, aspect, size and font settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureParams {
    pub title: String,
    pub title_ft_size: f64,
    pub fig_label: String,
    /// Center of the figure label; `None` uses the figure kind's usual spot.
    pub fig_label_coords: Option<(f64, f64)>,
    pub fig_label_ft_size: f64,
    pub aspect: Aspect,
    /// Multiplies the default 6.4 x 4.8 in figure size.
    pub scale: f64,
    pub font_family: FontFamily,
}

impl Default for FigureParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_ft_size: 20.0,
            fig_label: String::new(),
            fig_label_coords: None,
            fig_label_ft_size: 20.0,
            aspect: Aspect::Auto,
            scale: 1.0,
            font_family: FontFamily::Serif,
        }
    }
}

impl FigureParams {
    fn validate(&self) -> PlotResult<()> {
        positive("scale", self.scale)?;
        positive("title_ft_size", self.title_ft_size)?;
        positive("fig_label_ft_size", self.fig_label_ft_size)?;
        if let Some((x, y)) = self.fig_label_coords {
            if !(x.is_finite() && y.is_finite()) {
                return Err(PlotError::invalid("fig_label_coords", "coordinates must be finite"));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    /// Write the figure here when set.
    pub filename: Option<PathBuf>,
    pub img_fmt: ImageFormat,
    /// Display the figure after exporting it.
    pub show: bool,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self { filename: None, img_fmt: ImageFormat::Svg, show: true }
    }
}

/// Options of `single_plot`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    pub xy_data_sets: SeriesSet<XYData>,
    /// Draw markers only (no connecting line), per y-axis.
    pub scatterplot: AxisValue<bool>,
    pub colors: Option<StyleValue<Color>>,
    pub markers: Option<StyleValue<Marker>>,
    pub markersize: f64,
    pub linestyles: Option<StyleValue<LineStyle>>,
    /// Characteristic width: data lines use it, ticks and spines use two thirds of it.
    pub linewidth: f64,
    /// Zero disables the grid.
    pub grid_linewidth: f64,
    pub vlines: Vec<f64>,
    pub hlines: Vec<f64>,
    /// One style for all vertical lines, or one per line.
    pub vline_styles: Option<StyleValue<ReferenceLineStyle>>,
    pub hline_styles: Option<StyleValue<ReferenceLineStyle>>,
    pub x_lims: Limits,
    pub y_lims: AxisValue<Limits>,
    pub x_log_scale: bool,
    pub y_log_scale: AxisValue<bool>,
    pub x_label: String,
    /// A single label names the left axis only; a pair labels both.
    pub y_label: AxisValue<String>,
    pub xy_label_ft_size: f64,
    /// Presence of labels turns the legend on.
    pub legend_labels: Option<StyleValue<String>>,
    #[serde(flatten)]
    pub legend: LegendParams,
    #[serde(flatten)]
    pub ticks: TickParams,
    #[serde(flatten)]
    pub figure: FigureParams,
    #[serde(flatten)]
    pub output: OutputParams,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            xy_data_sets: SeriesSet::default(),
            scatterplot: AxisValue::Both(false),
            colors: None,
            markers: None,
            markersize: 11.0,
            linestyles: None,
            linewidth: 3.0,
            grid_linewidth: 0.0,
            vlines: Vec::new(),
            hlines: Vec::new(),
            vline_styles: None,
            hline_styles: None,
            x_lims: [None, None],
            y_lims: AxisValue::Both([None, None]),
            x_log_scale: false,
            y_log_scale: AxisValue::Both(false),
            x_label: String::new(),
            y_label: AxisValue::Both(String::new()),
            xy_label_ft_size: 20.0,
            legend_labels: None,
            legend: LegendParams::default(),
            ticks: TickParams::default(),
            figure: FigureParams::default(),
            output: OutputParams::default(),
        }
    }
}

impl PlotParams {
    /// Where the figure label goes when `fig_label_coords` is omitted (axes fractions).
    pub const FIG_LABEL_COORDS: (f64, f64) = (0.05, 0.93);

    pub fn new(xy_data_sets: impl Into<SeriesSet<XYData>>) -> Self {
        Self { xy_data_sets: xy_data_sets.into(), ..Self::default() }
    }

    /// Bounds checks on scalar options. Shape checks happen during normalization.
    pub fn validate(&self) -> PlotResult<()> {
        non_negative("markersize", self.markersize)?;
        non_negative("linewidth", self.linewidth)?;
        non_negative("grid_linewidth", self.grid_linewidth)?;
        positive("xy_label_ft_size", self.xy_label_ft_size)?;
        positive("legend_ft_size", self.legend.legend_ft_size)?;
        finite_all("vlines", &self.vlines)?;
        finite_all("hlines", &self.hlines)?;
        limits("x_lims", &self.x_lims)?;
        limits("y_lims", &self.y_lims.left())?;
        limits("y_lims", &self.y_lims.right())?;
        for (option, styles) in [("vline_styles", &self.vline_styles), ("hline_styles", &self.hline_styles)] {
            if let Some(styles) = styles {
                for style in style_entries(styles) {
                    reference_style(option, style)?;
                }
            }
        }
        self.ticks.validate()?;
        self.figure.validate()
    }
}

/// Options of `single_hist`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistParams {
    pub x_data_sets: Vec<XData>,
    pub bins: Bins,
    pub cumulative: Cumulative,
    /// Plot a probability density instead of counts.
    pub normalized: bool,
    pub colors: Option<StyleValue<Color>>,
    pub alphas: StyleValue<f64>,
    /// Ticks and spines use two thirds of this width.
    pub axes_linewidth: f64,
    pub bar_edge_width: f64,
    pub x_lims: Limits,
    pub y_lims: Limits,
    pub x_log_scale: bool,
    pub y_log_scale: bool,
    pub x_label: String,
    pub y_label: String,
    pub xy_label_ft_size: f64,
    pub legend_labels: Option<Vec<String>>,
    #[serde(flatten)]
    pub legend: LegendParams,
    #[serde(flatten)]
    pub ticks: TickParams,
    #[serde(flatten)]
    pub figure: FigureParams,
    #[serde(flatten)]
    pub output: OutputParams,
}

impl Default for HistParams {
    fn default() -> Self {
        Self {
            x_data_sets: Vec::new(),
            bins: Bins::Count(10),
            cumulative: Cumulative::Off,
            normalized: false,
            colors: None,
            alphas: StyleValue::Scalar(0.8),
            axes_linewidth: 3.0,
            bar_edge_width: 2.0,
            x_lims: [None, None],
            y_lims: [None, None],
            x_log_scale: false,
            y_log_scale: false,
            x_label: String::new(),
            y_label: String::new(),
            xy_label_ft_size: 20.0,
            legend_labels: None,
            legend: LegendParams::default(),
            ticks: TickParams::default(),
            figure: FigureParams::default(),
            output: OutputParams::default(),
        }
    }
}

impl HistParams {
    pub const FIG_LABEL_COORDS: (f64, f64) = (0.05, 0.93);

    pub fn new(x_data_sets: Vec<XData>) -> Self {
        Self { x_data_sets, ..Self::default() }
    }

    pub fn validate(&self) -> PlotResult<()> {
        non_negative("axes_linewidth", self.axes_linewidth)?;
        non_negative("bar_edge_width", self.bar_edge_width)?;
        positive("xy_label_ft_size", self.xy_label_ft_size)?;
        positive("legend_ft_size", self.legend.legend_ft_size)?;
        for alpha in style_entries(&self.alphas) {
            unit_interval("alphas", *alpha)?;
        }
        limits("x_lims", &self.x_lims)?;
        limits("y_lims", &self.y_lims)?;
        self.ticks.reject_split()?;
        self.ticks.validate()?;
        self.figure.validate()
    }
}

/// Placement of the colorbar next to the image axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorbarParams {
    pub position: ColorbarSide,
    /// Thickness as a fraction of the image axes (0.05 = 5%).
    pub size: f64,
    /// Gap to the image axes, in inches.
    pub pad: f64,
    pub label: String,
}

impl Default for ColorbarParams {
    fn default() -> Self {
        Self { position: ColorbarSide::Right, size: 0.05, pad: 0.05, label: String::new() }
    }
}

/// Options of `single_imshow`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImshowParams {
    pub z: Grid,
    pub cmap: Colormap,
    /// Data values mapped to the ends of the colormap; omitted ends use the data range.
    pub norm: Limits,
    pub interpolation: Interpolation,
    pub colorbar: ColorbarParams,
    /// Default: one tick per column.
    pub xticks: Option<Vec<f64>>,
    /// Default: one tick per row.
    pub yticks: Option<Vec<f64>>,
    pub cbticks: Option<Vec<f64>>,
    /// Default: blank labels.
    pub xticklabels: Option<Vec<String>>,
    pub yticklabels: Option<Vec<String>>,
    pub cbticklabels: Option<Vec<String>>,
    pub xtick_len: f64,
    pub ytick_len: f64,
    pub cbtick_len: f64,
    pub xtick_width: f64,
    pub ytick_width: f64,
    pub cbtick_width: f64,
    pub tick_label_ft_size: f64,
    pub vlines: Vec<f64>,
    pub hlines: Vec<f64>,
    pub vline_style: ReferenceLineStyle,
    pub hline_style: ReferenceLineStyle,
    /// Line width of the image and colorbar frames.
    pub frame_thickness: f64,
    pub x_label: String,
    pub y_label: String,
    pub xy_label_ft_size: f64,
    #[serde(flatten)]
    pub figure: FigureParams,
    #[serde(flatten)]
    pub output: OutputParams,
}

impl Default for ImshowParams {
    fn default() -> Self {
        Self {
            z: Grid::default(),
            cmap: Colormap::Viridis,
            norm: [None, None],
            interpolation: Interpolation::Nearest,
            colorbar: ColorbarParams::default(),
            xticks: None,
            yticks: None,
            cbticks: None,
            xticklabels: None,
            yticklabels: None,
            cbticklabels: None,
            xtick_len: 8.0,
            ytick_len: 8.0,
            cbtick_len: 8.0,
            xtick_width: 2.0,
            ytick_width: 2.0,
            cbtick_width: 2.0,
            tick_label_ft_size: 18.0,
            vlines: Vec::new(),
            hlines: Vec::new(),
            vline_style: ReferenceLineStyle::default(),
            hline_style: ReferenceLineStyle::default(),
            frame_thickness: 2.0,
            x_label: String::new(),
            y_label: String::new(),
            xy_label_ft_size: 20.0,
            figure: FigureParams::default(),
            output: OutputParams::default(),
        }
    }
}

impl ImshowParams {
    /// Figure label position when `fig_label_coords` is omitted (figure fractions).
    pub const FIG_LABEL_COORDS: (f64, f64) = (0.07, 0.91);

    pub fn new(z: Grid) -> Self {
        Self { z, ..Self::default() }
    }

    pub fn validate(&self) -> PlotResult<()> {
        for (option, v) in [
            ("xtick_len", self.xtick_len),
            ("ytick_len", self.ytick_len),
            ("cbtick_len", self.cbtick_len),
            ("xtick_width", self.xtick_width),
            ("ytick_width", self.ytick_width),
            ("cbtick_width", self.cbtick_width),
            ("frame_thickness", self.frame_thickness),
        ] {
            non_negative(option, v)?;
        }
        positive("tick_label_ft_size", self.tick_label_ft_size)?;
        positive("xy_label_ft_size", self.xy_label_ft_size)?;
        if !(self.colorbar.size.is_finite() && self.colorbar.size > 0.0 && self.colorbar.size < 1.0) {
            return Err(PlotError::invalid("colorbar.size", "must lie in (0, 1)"));
        }
        non_negative("colorbar.pad", self.colorbar.pad)?;
        if let [Some(lo), Some(hi)] = self.norm {
            if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
                return Err(PlotError::invalid("norm", format!("need vmin < vmax, got [{lo}, {hi}]")));
            }
        }
        finite_all("vlines", &self.vlines)?;
        finite_all("hlines", &self.hlines)?;
        reference_style("vline_style", &self.vline_style)?;
        reference_style("hline_style", &self.hline_style)?;
        self.figure.validate()
    }
}

fn style_entries<T>(value: &StyleValue<T>) -> Box<dyn Iterator<Item = &T> + '_> {
    match value {
        StyleValue::Scalar(v) => Box::new(std::iter::once(v)),
        StyleValue::PerSeries(list) => Box::new(list.iter()),
        StyleValue::PerGroup(left, right) => Box::new(left.iter().chain(right)),
    }
}

fn reference_style(option: &'static str, style: &ReferenceLineStyle) -> PlotResult<()> {
    non_negative(option, style.linewidth)?;
    unit_interval(option, style.alpha)
}

fn positive(option: &'static str, v: f64) -> PlotResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(PlotError::invalid(option, format!("must be positive, got {v}")))
    }
}

fn non_negative(option: &'static str, v: f64) -> PlotResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(PlotError::invalid(option, format!("must be non-negative, got {v}")))
    }
}

fn unit_interval(option: &'static str, v: f64) -> PlotResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(PlotError::invalid(option, format!("must lie in [0, 1], got {v}")))
    }
}

fn spacing(option: &'static str, v: Option<f64>) -> PlotResult<()> {
    match v {
        Some(v) => positive(option, v),
        None => Ok(()),
    }
}

fn finite_all(option: &'static str, values: &[f64]) -> PlotResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::invalid(option, "positions must be finite"))
    }
}

fn limits(option: &'static str, lims: &Limits) -> PlotResult<()> {
    for v in lims.iter().flatten() {
        if !v.is_finite() {
            return Err(PlotError::invalid(option, "limits must be finite"));
        }
    }
    if let [Some(lo), Some(hi)] = lims {
        if lo == hi {
            return Err(PlotError::invalid(option, format!("empty range [{lo}, {hi}]")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let p = PlotParams::default();
        assert_eq!(p.markersize, 11.0);
        assert_eq!(p.linewidth, 3.0);
        assert_eq!(p.ticks.major_xtick_len, 8.0);
        assert_eq!(p.output.img_fmt, ImageFormat::Svg);
        let h = HistParams::default();
        assert_eq!(h.bins, Bins::Count(10));
        assert_eq!(h.alphas, StyleValue::Scalar(0.8));
        assert!(p.validate().is_ok());
        assert!(h.validate().is_ok());
    }

    #[test]
    fn out_of_range_options_are_rejected() {
        let p = PlotParams { figure: FigureParams { scale: 0.0, ..FigureParams::default() }, ..PlotParams::default() };
        assert!(matches!(p.validate(), Err(PlotError::InvalidOption { option: "scale", .. })));

        let h = HistParams { alphas: StyleValue::PerSeries(vec![0.5, 1.5]), ..HistParams::default() };
        assert!(matches!(h.validate(), Err(PlotError::InvalidOption { option: "alphas", .. })));
    }

    #[test]
    fn histogram_rejects_split_y_spacing() {
        let h = HistParams {
            ticks: TickParams { major_ytick_spacing: Some(AxisValue::Split(1.0, 2.0)), ..TickParams::default() },
            ..HistParams::default()
        };
        assert!(h.validate().is_err());
    }
}
