// File: crates/prettyplot-render-skia/src/scale.rs
// Summary: Axis ranges (autoscale with margins, user limits) and data-to-pixel transforms.

use prettyplot_core::render::AxisScale;
use prettyplot_core::types::Limits;

/// Fraction of the data span added on each side when autoscaling.
pub const MARGIN: f64 = 0.05;

/// Running min/max of the finite (and, for log axes, positive) values fed to an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    bounds: Option<(f64, f64)>,
    /// Some bar touches zero; the autoscaled range must not extend below it.
    pub sticky_zero: bool,
}

impl Extent {
    pub fn push(&mut self, v: f64, scale: AxisScale) {
        if !v.is_finite() || (scale == AxisScale::Log10 && v <= 0.0) {
            return;
        }
        self.bounds = Some(match self.bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = f64>, scale: AxisScale) {
        for v in values {
            self.push(v, scale);
        }
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }
}

/// Visible range of an axis. `lo > hi` draws the axis inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    pub fn min(&self) -> f64 {
        self.lo.min(self.hi)
    }

    pub fn max(&self) -> f64 {
        self.lo.max(self.hi)
    }

    /// Autoscaled range of `extent` with user `limits` applied on top.
    pub fn resolve(extent: &Extent, scale: AxisScale, limits: Limits) -> Self {
        let (auto_lo, auto_hi) = auto_range(extent, scale);
        let usable = |v: Option<f64>| v.filter(|v| v.is_finite() && (scale == AxisScale::Linear || *v > 0.0));
        let lo = usable(limits[0]).unwrap_or(auto_lo);
        let hi = usable(limits[1]).unwrap_or(auto_hi);
        if lo == hi {
            let (lo, hi) = widen(lo, scale);
            return Self { lo, hi };
        }
        Self { lo, hi }
    }
}

fn auto_range(extent: &Extent, scale: AxisScale) -> (f64, f64) {
    let Some((min, max)) = extent.bounds() else {
        return match scale {
            AxisScale::Linear => (0.0, 1.0),
            AxisScale::Log10 => (1.0, 10.0),
        };
    };
    if min == max {
        return widen(min, scale);
    }
    match scale {
        AxisScale::Linear => {
            let pad = (max - min) * MARGIN;
            let lo = if extent.sticky_zero && min == 0.0 { 0.0 } else { min - pad };
            (lo, max + pad)
        }
        AxisScale::Log10 => {
            let (lmin, lmax) = (min.log10(), max.log10());
            let pad = (lmax - lmin) * MARGIN;
            (10f64.powf(lmin - pad), 10f64.powf(lmax + pad))
        }
    }
}

/// Non-empty range around a single value.
fn widen(v: f64, scale: AxisScale) -> (f64, f64) {
    match scale {
        AxisScale::Linear => {
            let d = if v == 0.0 { 1.0 } else { v.abs() * 0.1 };
            (v - d, v + d)
        }
        AxisScale::Log10 => (v / 10.0, v * 10.0),
    }
}

/// Maps data values of one axis onto a pixel interval.
///
/// `px0` is where `range.lo` lands, `px1` where `range.hi` lands; for a y-axis
/// pass the bottom edge as `px0` so values grow upwards.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub px0: f32,
    pub px1: f32,
    pub range: Range,
    pub scale: AxisScale,
    // transformed endpoints (log10 for log axes)
    t0: f64,
    t1: f64,
}

impl ValueScale {
    pub fn new(scale: AxisScale, range: Range, px0: f32, px1: f32) -> Self {
        let f = |v: f64| forward(scale, v);
        let (t0, mut t1) = (f(range.lo), f(range.hi));
        if (t1 - t0).abs() < 1e-12 {
            t1 = t0 + 1.0;
        }
        Self { px0, px1, range, scale, t0, t1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (forward(self.scale, v) - self.t0) / (self.t1 - self.t0);
        self.px0 + (t as f32) * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let t = ((px - self.px0) / (self.px1 - self.px0)) as f64;
        inverse(self.scale, self.t0 + t * (self.t1 - self.t0))
    }

    /// Value lies inside the visible range (inclusive, with a little slack for rounding).
    pub fn contains(&self, v: f64) -> bool {
        if !v.is_finite() {
            return false;
        }
        let t = forward(self.scale, v);
        let (a, b) = (self.t0.min(self.t1), self.t0.max(self.t1));
        let slack = (b - a) * 1e-9;
        t >= a - slack && t <= b + slack
    }

    /// Pixel length of the axis.
    pub fn len_px(&self) -> f32 {
        (self.px1 - self.px0).abs()
    }

    /// Span of the range in transformed units (decades for log axes).
    pub fn span(&self) -> f64 {
        (self.t1 - self.t0).abs()
    }
}

#[inline]
fn forward(scale: AxisScale, v: f64) -> f64 {
    match scale {
        AxisScale::Linear => v,
        AxisScale::Log10 => v.max(1e-300).log10(),
    }
}

#[inline]
fn inverse(scale: AxisScale, t: f64) -> f64 {
    match scale {
        AxisScale::Linear => t,
        AxisScale::Log10 => 10f64.powf(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoscale_adds_five_percent() {
        let mut e = Extent::default();
        e.extend([0.0, 10.0], AxisScale::Linear);
        let r = Range::resolve(&e, AxisScale::Linear, [None, None]);
        assert!((r.lo + 0.5).abs() < 1e-12 && (r.hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn sticky_zero_and_limits() {
        let mut e = Extent { sticky_zero: true, ..Extent::default() };
        e.extend([0.0, 4.0], AxisScale::Linear);
        let r = Range::resolve(&e, AxisScale::Linear, [None, Some(8.0)]);
        assert_eq!((r.lo, r.hi), (0.0, 8.0));
    }

    #[test]
    fn log_axis_ignores_non_positive_values() {
        let mut e = Extent::default();
        e.extend([-1.0, 0.0, 1.0, 100.0], AxisScale::Log10);
        assert_eq!(e.bounds(), Some((1.0, 100.0)));
        let s = ValueScale::new(AxisScale::Log10, Range { lo: 1.0, hi: 100.0 }, 0.0, 200.0);
        assert!((s.to_px(10.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn inverted_range_flips_pixels() {
        let s = ValueScale::new(AxisScale::Linear, Range { lo: 2.5, hi: -0.5 }, 300.0, 0.0);
        assert!((s.to_px(2.5) - 300.0).abs() < 1e-3);
        assert!((s.to_px(-0.5)).abs() < 1e-3);
        assert!((s.from_px(150.0) - 1.0).abs() < 1e-9);
    }
}
