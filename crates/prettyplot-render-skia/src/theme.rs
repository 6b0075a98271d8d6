// File: crates/prettyplot-render-skia/src/theme.rs
// Summary: Fixed figure palette and colormap lookup (colorous gradients).

use prettyplot_core::{Color, Colormap};
use skia_safe as skia;

/// Colors of the non-data parts of a figure.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_frame: skia::Color,
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame: skia::Color::from_argb(255, 204, 204, 204),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

#[inline]
pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `c` with its alpha multiplied by `alpha` (clamped to [0, 1]).
#[inline]
pub fn faded(c: Color, alpha: f64) -> skia::Color {
    to_skia(c.with_alpha(alpha))
}

fn gradient(cmap: Colormap) -> colorous::Gradient {
    match cmap {
        Colormap::Viridis => colorous::VIRIDIS,
        Colormap::Plasma => colorous::PLASMA,
        Colormap::Inferno => colorous::INFERNO,
        Colormap::Magma => colorous::MAGMA,
        Colormap::Cividis => colorous::CIVIDIS,
        Colormap::Turbo => colorous::TURBO,
        Colormap::Greys => colorous::GREYS,
        Colormap::Blues => colorous::BLUES,
        Colormap::Reds => colorous::REDS,
        Colormap::RedBlue => colorous::RED_BLUE,
    }
}

/// Color of `t` in [0, 1] along `cmap`. Non-finite `t` is transparent.
pub fn colormap(cmap: Colormap, t: f64) -> skia::Color {
    if !t.is_finite() {
        return skia::Color::TRANSPARENT;
    }
    let c = gradient(cmap).eval_continuous(t.clamp(0.0, 1.0));
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

/// Normalized position of `v` between `vmin` and `vmax`; equal ends map everything to 0.
#[inline]
pub fn normalize(v: f64, vmin: f64, vmax: f64) -> f64 {
    let span = vmax - vmin;
    if span.abs() < f64::EPSILON {
        0.0
    } else {
        (v - vmin) / span
    }
}
