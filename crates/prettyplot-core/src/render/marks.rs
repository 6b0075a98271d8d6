// File: crates/prettyplot-core/src/render/marks.rs
// Summary: Resolved drawing instructions passed from the dispatcher to a renderer.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::data::{Grid, XYData};
use crate::route::AxisGroup;
use crate::style::{Aspect, Colormap, FontFamily, Interpolation, LegendLoc, LineStyle, Marker};
use crate::types::{Limits, DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};

/// Size and text settings of a new figure. Text settings apply to this figure only.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub font_family: FontFamily,
    pub background: Color,
}

impl FigureSpec {
    /// Default figure size multiplied by `scale`.
    pub fn scaled(scale: f64, font_family: FontFamily) -> Self {
        Self {
            width_in: FIGURE_WIDTH_IN * scale,
            height_in: FIGURE_HEIGHT_IN * scale,
            dpi: DPI,
            font_family,
            background: Color::WHITE,
        }
    }

    pub fn width_px(&self) -> u32 {
        (self.width_in * self.dpi).round().max(1.0) as u32
    }

    pub fn height_px(&self) -> u32 {
        (self.height_in * self.dpi).round().max(1.0) as u32
    }
}

impl Default for FigureSpec {
    fn default() -> Self {
        Self::scaled(1.0, FontFamily::default())
    }
}

/// One XY series. `color: None` takes the next color of the axis' cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct LineMark {
    pub data: XYData,
    pub color: Option<Color>,
    pub line_style: LineStyle,
    pub line_width: f64,
    pub marker: Marker,
    pub marker_size: f64,
    pub label: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistogramKind {
    /// Filled bars without edge lines.
    Bar,
    /// Unfilled outline tracing the bar tops.
    Step,
    /// Unfilled bars with edge lines only.
    Outline,
}

/// Precomputed histogram: `heights.len() == edges.len() - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramMark {
    pub edges: Vec<f64>,
    pub heights: Vec<f64>,
    pub kind: HistogramKind,
    /// Fill (for `Bar`) or line (for `Step`) color; `None` takes the next cycle color.
    pub color: Option<Color>,
    /// Edge color for `Outline`.
    pub edge_color: Color,
    pub edge_width: f64,
    pub alpha: f64,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageMark {
    pub grid: Grid,
    pub colormap: Colormap,
    /// Values mapped to the two ends of the colormap; equal ends map everything to the low end.
    pub vmin: f64,
    pub vmax: f64,
    pub interpolation: Interpolation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Appearance of a reference line spanning the whole axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceLineStyle {
    pub color: Color,
    pub linewidth: f64,
    pub linestyle: LineStyle,
    pub alpha: f64,
}

impl Default for ReferenceLineStyle {
    fn default() -> Self {
        Self { color: Color::cycle(0), linewidth: 1.5, linestyle: LineStyle::Solid, alpha: 1.0 }
    }
}

/// A vertical line at x = `position` or a horizontal line at y = `position` (left y-axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub position: f64,
    pub style: ReferenceLineStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y(AxisGroup),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisScale {
    #[default]
    Linear,
    Log10,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickDirection {
    #[default]
    In,
    Out,
}

/// Everything about one axis: scale, range, tick placement and tick/label appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    pub label: String,
    pub label_size: f64,
    pub scale: AxisScale,
    pub limits: Limits,
    /// Major ticks at every multiple of this spacing.
    pub major_spacing: Option<f64>,
    pub minor_spacing: Option<f64>,
    pub minor_ticks: bool,
    /// Explicit major tick positions; overrides `major_spacing`.
    pub ticks: Option<Vec<f64>>,
    /// Labels for `ticks`, same length.
    pub tick_labels: Option<Vec<String>>,
    pub show_tick_labels: bool,
    pub tick_label_size: f64,
    pub major_len: f64,
    pub minor_len: f64,
    pub tick_width: f64,
    pub direction: TickDirection,
    /// Repeat the ticks on the opposite side of the axes.
    pub both_sides: bool,
    /// Right y-axis only: take range and minor ticks from the left y-axis.
    pub mirror_left: bool,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            label: String::new(),
            label_size: 20.0,
            scale: AxisScale::Linear,
            limits: [None, None],
            major_spacing: None,
            minor_spacing: None,
            minor_ticks: true,
            ticks: None,
            tick_labels: None,
            show_tick_labels: true,
            tick_label_size: 18.0,
            major_len: 8.0,
            minor_len: 5.0,
            tick_width: 2.0,
            direction: TickDirection::In,
            both_sides: false,
            mirror_left: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorbarSide {
    #[default]
    Right,
    Left,
    Top,
    Bottom,
}

/// Colorbar attached to the image axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Colorbar {
    pub side: ColorbarSide,
    /// Thickness as a fraction of the image axes' size.
    pub size: f64,
    /// Gap between image axes and colorbar, in inches.
    pub pad: f64,
    pub label: String,
    pub ticks: Option<Vec<f64>>,
    pub tick_labels: Option<Vec<String>>,
    pub tick_label_size: f64,
    pub tick_len: f64,
    pub tick_width: f64,
    pub outline_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry<H> {
    pub handle: H,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend<H> {
    pub entries: Vec<LegendEntry<H>>,
    pub loc: LegendLoc,
    pub font_size: f64,
    pub frame: bool,
}

/// Coordinate system of a figure label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Fractions of the axes box.
    Axes,
    /// Fractions of the whole figure.
    Figure,
}

/// Text centered at `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureLabel {
    pub text: String,
    pub position: (f64, f64),
    pub size: f64,
    pub anchor: LabelAnchor,
}

/// Figure-level dressing applied after the marks.
#[derive(Clone, Debug, PartialEq)]
pub struct Decorations {
    pub title: String,
    pub title_size: f64,
    pub fig_label: Option<FigureLabel>,
    /// Grid line width; `None` disables the grid.
    pub grid: Option<f64>,
    pub spine_width: f64,
    pub aspect: Aspect,
}
