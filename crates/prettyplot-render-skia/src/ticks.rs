// File: crates/prettyplot-render-skia/src/ticks.rs
// Summary: Major/minor tick placement (explicit, fixed spacing, nice steps, log decades) and labels.

use prettyplot_core::render::{AxisScale, AxisStyle};
use tracing::warn;

use crate::scale::Range;

/// Rough number of major intervals aimed for by the automatic locator.
const TARGET_INTERVALS: f64 = 6.0;
/// Beyond this many ticks a fixed spacing is considered a mistake and replaced.
const MAX_TICKS: f64 = 1000.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks {
    pub major: Vec<f64>,
    pub labels: Vec<String>,
    pub minor: Vec<f64>,
}

/// Ticks of `style` over `range`.
pub fn locate(style: &AxisStyle, range: Range) -> Ticks {
    let (min, max) = (range.min(), range.max());
    if let Some(explicit) = &style.ticks {
        return explicit_ticks(explicit, style.tick_labels.as_deref(), min, max);
    }
    let mut ticks = match style.scale {
        AxisScale::Linear => linear_ticks(style, min, max),
        AxisScale::Log10 => log_ticks(style, min, max),
    };
    if !style.minor_ticks {
        ticks.minor.clear();
    }
    ticks
}

fn explicit_ticks(ticks: &[f64], labels: Option<&[String]>, min: f64, max: f64) -> Ticks {
    let slack = (max - min).abs() * 1e-9;
    let step = ticks.windows(2).map(|w| (w[1] - w[0]).abs()).fold(f64::INFINITY, f64::min);
    let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
    let mut out = Ticks::default();
    for (i, &t) in ticks.iter().enumerate() {
        if !(t >= min - slack && t <= max + slack) {
            continue;
        }
        out.major.push(t);
        out.labels.push(match labels {
            Some(l) => l.get(i).cloned().unwrap_or_default(),
            None => format_linear(t, step),
        });
    }
    out
}

fn linear_ticks(style: &AxisStyle, min: f64, max: f64) -> Ticks {
    let span = max - min;
    let auto = nice_step(span / TARGET_INTERVALS);
    let step = match style.major_spacing {
        Some(s) if span / s <= MAX_TICKS => s,
        Some(s) => {
            warn!(spacing = s, span, "major tick spacing too fine; using automatic ticks");
            auto
        }
        None => auto,
    };
    let major = multiples(step, min, max);
    let labels = major.iter().map(|&v| format_linear(v, step)).collect();

    let minor_step = match style.minor_spacing {
        Some(s) if span / s <= MAX_TICKS => s,
        _ => step / minor_divisions(step) as f64,
    };
    let minor = multiples(minor_step, min, max)
        .into_iter()
        .filter(|m| !major.iter().any(|v| (v - m).abs() < step * 1e-6))
        .collect();
    Ticks { major, labels, minor }
}

fn log_ticks(style: &AxisStyle, min: f64, max: f64) -> Ticks {
    let (lmin, lmax) = (min.log10(), max.log10());
    let first = lmin.ceil() as i32;
    let last = lmax.floor() as i32;
    if last - first < 1 {
        // Less than two decades visible: fall back to plain numbers.
        let mut t = linear_ticks(&AxisStyle { major_spacing: None, minor_spacing: None, ..style.clone() }, min, max);
        t.major.retain(|v| *v > 0.0);
        t.labels = t.major.iter().map(|&v| format_linear(v, nice_step((max - min) / TARGET_INTERVALS))).collect();
        t.minor.retain(|v| *v > 0.0);
        return t;
    }
    let stride = (((last - first) as f64) / 10.0).ceil().max(1.0) as i32;
    let mut major = Vec::new();
    let mut labels = Vec::new();
    for e in (first..=last).filter(|e| (e - first) % stride == 0) {
        major.push(10f64.powi(e));
        labels.push(format_power(e));
    }
    let mut minor = Vec::new();
    if stride == 1 {
        for e in (lmin.floor() as i32)..=(lmax.ceil() as i32) {
            let base = 10f64.powi(e);
            minor.extend((2..10).map(|k| k as f64 * base).filter(|v| *v >= min && *v <= max));
        }
    } else {
        minor.extend((first..=last).filter(|e| (e - first) % stride != 0).map(|e| 10f64.powi(e)));
    }
    Ticks { major, labels, minor }
}

/// All multiples of `step` inside [min, max].
fn multiples(step: f64, min: f64, max: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let slack = step * 1e-9;
    let first = ((min - slack) / step).ceil() as i64;
    let last = ((max + slack) / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Smallest of 1, 2, 2.5, 5, 10 times a power of ten not below `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0].into_iter().find(|n| *n >= norm - 1e-9).unwrap_or(10.0);
    nice * mag
}

/// Minor intervals per major interval: 4 for 2-like steps, 5 otherwise.
fn minor_divisions(step: f64) -> u32 {
    let mag = 10f64.powi(step.log10().floor() as i32);
    let mantissa = (step / mag * 10.0).round() / 10.0;
    if (mantissa - 2.0).abs() < 1e-6 {
        4
    } else {
        5
    }
}

/// Decimal label with just enough digits to tell neighbouring ticks apart.
pub fn format_linear(v: f64, step: f64) -> String {
    let magnitude = v.abs();
    if magnitude != 0.0 && (magnitude >= 1e6 || magnitude < 1e-4) {
        return format!("{v:.1e}");
    }
    let decimals = if step >= 1.0 || step <= 0.0 { 0 } else { (-step.log10().floor()) as usize };
    let decimals = if (step * 10f64.powi(decimals as i32)).fract().abs() > 1e-6 { decimals + 1 } else { decimals };
    let s = format!("{v:.decimals$}");
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s.replace('-', "\u{2212}")
    }
}

/// `10` followed by the exponent in superscript digits.
pub fn format_power(e: i32) -> String {
    const SUP: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut s = String::from("10");
    if e < 0 {
        s.push('⁻');
    }
    for d in e.unsigned_abs().to_string().bytes() {
        s.push(SUP[(d - b'0') as usize]);
    }
    s
}
