// File: crates/prettyplot-core/src/types.rs
// Summary: Shared figure constants (default size, resolution) and small value aliases.

/// Default figure width in inches (before `scale`).
pub const FIGURE_WIDTH_IN: f64 = 6.4;
/// Default figure height in inches (before `scale`).
pub const FIGURE_HEIGHT_IN: f64 = 4.8;
/// Raster resolution used when exporting and displaying figures.
pub const DPI: f64 = 100.0;
/// Padding around the axes block, in font-size fractions.
pub const LAYOUT_PAD: f64 = 1.08;

/// Lower and upper axis limit; `None` leaves that end to autoscaling.
/// Upper below lower inverts the axis.
pub type Limits = [Option<f64>; 2];

/// Convert typographic points (1/72 in) to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f64, dpi: f64) -> f64 {
    pt * dpi / 72.0
}
