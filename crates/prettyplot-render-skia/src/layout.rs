// File: crates/prettyplot-render-skia/src/layout.rs
// Summary: Figure geometry: plot insets, aspect fitting, colorbar slots and legend placement.

use prettyplot_core::render::{Colorbar, ColorbarSide};
use prettyplot_core::LegendPosition;
use skia_safe as skia;

/// Space between the figure edge and the plot area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn hsum(&self) -> f32 {
        self.left + self.right
    }
    pub fn vsum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Plot rectangle inside a `width` x `height` figure. Never collapses below a few pixels.
pub fn plot_rect(width: f32, height: f32, insets: &Insets) -> skia::Rect {
    const MIN: f32 = 8.0;
    let w = (width - insets.hsum()).max(MIN);
    let h = (height - insets.vsum()).max(MIN);
    let left = insets.left.min(width - w).max(0.0);
    let top = insets.top.min(height - h).max(0.0);
    skia::Rect::from_xywh(left, top, w, h)
}

/// Shrink `rect` (keeping its center) so one y unit is `ratio` times as long as one x unit.
///
/// `x_span`/`y_span` are the visible data spans in scale units (decades on log axes).
pub fn fit_aspect(rect: skia::Rect, ratio: f64, x_span: f64, y_span: f64) -> skia::Rect {
    if !(x_span > 0.0 && y_span > 0.0 && ratio > 0.0) {
        return rect;
    }
    let want = (ratio * y_span / x_span) as f32; // height / width
    let (w, h) = (rect.width(), rect.height());
    let (nw, nh) = if h / w > want { (w, w * want) } else { (h / want, h) };
    let (cx, cy) = (rect.center_x(), rect.center_y());
    skia::Rect::from_xywh(cx - nw / 2.0, cy - nh / 2.0, nw, nh)
}

/// Area left for the image axes once the colorbar and its gap are taken out of `area`.
///
/// `inner` is extra room kept between axes and bar when the bar sits on the
/// side where the axes draw their own tick labels.
pub fn reserve_colorbar(area: skia::Rect, cb: &Colorbar, gap: f32, inner: f32) -> skia::Rect {
    let frac = cb.size.max(0.0) as f32;
    let mut r = area;
    match cb.side {
        ColorbarSide::Right | ColorbarSide::Left => {
            let axes_w = ((area.width() - gap - inner) / (1.0 + frac)).max(1.0);
            let taken = area.width() - axes_w;
            if cb.side == ColorbarSide::Right {
                r.right -= taken;
            } else {
                r.left += taken;
            }
        }
        ColorbarSide::Top | ColorbarSide::Bottom => {
            let axes_h = ((area.height() - gap - inner) / (1.0 + frac)).max(1.0);
            let taken = area.height() - axes_h;
            if cb.side == ColorbarSide::Bottom {
                r.bottom -= taken;
            } else {
                r.top += taken;
            }
        }
    }
    r
}

/// Colorbar rectangle glued to `axes` on `cb.side`, as long as the matching axes side.
pub fn attach_colorbar(axes: skia::Rect, cb: &Colorbar, gap: f32, inner: f32) -> skia::Rect {
    let frac = cb.size.max(0.0) as f32;
    match cb.side {
        ColorbarSide::Right => {
            let l = axes.right + gap;
            skia::Rect::from_ltrb(l, axes.top, l + frac * axes.width(), axes.bottom)
        }
        ColorbarSide::Left => {
            let r = axes.left - gap - inner;
            skia::Rect::from_ltrb(r - frac * axes.width(), axes.top, r, axes.bottom)
        }
        ColorbarSide::Top => {
            let b = axes.top - gap;
            skia::Rect::from_ltrb(axes.left, b - frac * axes.height(), axes.right, b)
        }
        ColorbarSide::Bottom => {
            let t = axes.bottom + gap + inner;
            skia::Rect::from_ltrb(axes.left, t, axes.right, t + frac * axes.height())
        }
    }
}

/// Candidate order tried by `best_legend_rect`; ties keep the earlier one.
const BEST_ORDER: [LegendPosition; 9] = [
    LegendPosition::UpperRight,
    LegendPosition::UpperLeft,
    LegendPosition::LowerLeft,
    LegendPosition::LowerRight,
    LegendPosition::CenterLeft,
    LegendPosition::CenterRight,
    LegendPosition::LowerCenter,
    LegendPosition::UpperCenter,
    LegendPosition::Center,
];

/// Legend box of `size` at a named position inside `plot`, `pad` away from the frame.
pub fn legend_rect(plot: skia::Rect, (w, h): (f32, f32), pos: LegendPosition, pad: f32) -> skia::Rect {
    let left = plot.left + pad;
    let right = plot.right - pad - w;
    let hcenter = plot.center_x() - w / 2.0;
    let top = plot.top + pad;
    let bottom = plot.bottom - pad - h;
    let vcenter = plot.center_y() - h / 2.0;
    let (x, y) = match pos {
        LegendPosition::UpperRight | LegendPosition::Best => (right, top),
        LegendPosition::UpperLeft => (left, top),
        LegendPosition::LowerLeft => (left, bottom),
        LegendPosition::LowerRight => (right, bottom),
        LegendPosition::Right | LegendPosition::CenterRight => (right, vcenter),
        LegendPosition::CenterLeft => (left, vcenter),
        LegendPosition::LowerCenter => (hcenter, bottom),
        LegendPosition::UpperCenter => (hcenter, top),
        LegendPosition::Center => (hcenter, vcenter),
    };
    skia::Rect::from_xywh(x, y, w, h)
}

/// Named position whose box covers the fewest of `points` (pixel coordinates).
pub fn best_legend_rect(plot: skia::Rect, size: (f32, f32), pad: f32, points: &[(f32, f32)]) -> skia::Rect {
    let mut best = legend_rect(plot, size, BEST_ORDER[0], pad);
    let mut best_hits = usize::MAX;
    for pos in BEST_ORDER {
        let r = legend_rect(plot, size, pos, pad);
        let hits = points.iter().filter(|(x, y)| r.contains(skia::Point::new(*x, *y))).count();
        if hits < best_hits {
            best = r;
            best_hits = hits;
        }
        if hits == 0 {
            break;
        }
    }
    best
}

/// Legend box with its lower-left corner at axes fractions `(fx, fy)`.
pub fn anchored_legend_rect(plot: skia::Rect, (w, h): (f32, f32), [fx, fy]: [f64; 2]) -> skia::Rect {
    let x = plot.left + fx as f32 * plot.width();
    let y = plot.bottom - fy as f32 * plot.height();
    skia::Rect::from_xywh(x, y - h, w, h)
}
