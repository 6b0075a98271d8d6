// File: crates/prettyplot-core/src/histogram.rs
// Summary: Histogram binning and counting (edges, counts, density, cumulative sums).
// Notes:
// - Bins are half-open `[a, b)` except the last, which also includes its
//   right edge. Samples outside the edges and NaNs are not counted.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::grid::{linspace, logspace};

/// Bin specification: a bin count spread over the data range, or explicit edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bins {
    Count(usize),
    Edges(Vec<f64>),
}

impl Default for Bins {
    fn default() -> Self {
        Bins::Count(10)
    }
}

impl From<usize> for Bins {
    fn from(n: usize) -> Self {
        Bins::Count(n)
    }
}

/// Direction of accumulation for cumulative histograms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CumulativeRepr", into = "CumulativeRepr")]
pub enum Cumulative {
    #[default]
    Off,
    /// Each bin holds its count plus the counts of all bins to its left.
    Forward,
    /// Each bin holds its count plus the counts of all bins to its right.
    Reverse,
}

/// Accepts `false`/`true`, a signed number (negative reverses) or a name.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CumulativeRepr {
    Flag(bool),
    Signed(f64),
    Name(String),
}

impl TryFrom<CumulativeRepr> for Cumulative {
    type Error = PlotError;

    fn try_from(repr: CumulativeRepr) -> PlotResult<Self> {
        Ok(match repr {
            CumulativeRepr::Flag(false) => Cumulative::Off,
            CumulativeRepr::Flag(true) => Cumulative::Forward,
            CumulativeRepr::Signed(v) if v < 0.0 => Cumulative::Reverse,
            CumulativeRepr::Signed(v) if v > 0.0 => Cumulative::Forward,
            CumulativeRepr::Signed(_) => Cumulative::Off,
            CumulativeRepr::Name(n) => match n.trim().to_ascii_lowercase().as_str() {
                "off" | "none" => Cumulative::Off,
                "forward" => Cumulative::Forward,
                "reverse" => Cumulative::Reverse,
                _ => return Err(PlotError::invalid("cumulative", format!("unknown value `{n}`"))),
            },
        })
    }
}

impl From<Cumulative> for CumulativeRepr {
    fn from(c: Cumulative) -> Self {
        let name = match c {
            Cumulative::Off => "off",
            Cumulative::Forward => "forward",
            Cumulative::Reverse => "reverse",
        };
        CumulativeRepr::Name(name.to_string())
    }
}

impl From<bool> for Cumulative {
    fn from(on: bool) -> Self {
        if on { Cumulative::Forward } else { Cumulative::Off }
    }
}

impl Cumulative {
    pub fn is_on(&self) -> bool {
        !matches!(self, Cumulative::Off)
    }
}

/// Largest accepted `Bins::Count`.
pub const MAX_BINS: usize = 1_000_000;

/// Compute bin edges for `samples`.
///
/// `Count(n)` spreads `n + 1` edges over `[min, max]` of the finite samples;
/// explicit edges are sorted and must be distinct. With `log_x` the edges are replaced by as many
/// log-spaced edges between the first and the last edge.
pub fn bin_edges(samples: &[f64], bins: &Bins, log_x: bool) -> PlotResult<Vec<f64>> {
    let edges = match bins {
        Bins::Count(0) => return Err(PlotError::invalid("bins", "bin count must be at least 1")),
        Bins::Count(n) if *n > MAX_BINS => {
            return Err(PlotError::invalid("bins", format!("bin count {n} exceeds the limit of {MAX_BINS}")))
        }
        Bins::Count(n) => {
            let (lo, hi) = crate::data::finite_range(samples).ok_or_else(|| {
                PlotError::DegenerateData("histogram series has no finite samples".into())
            })?;
            if lo == hi {
                return Err(PlotError::DegenerateData(format!(
                    "histogram series has zero range (every sample is {lo}); give explicit bin edges"
                )));
            }
            linspace(lo, hi, n + 1)
        }
        Bins::Edges(edges) => {
            if edges.len() < 2 {
                return Err(PlotError::invalid("bins", "at least two bin edges are required"));
            }
            if edges.iter().any(|e| !e.is_finite()) {
                return Err(PlotError::invalid("bins", "bin edges must be finite"));
            }
            let mut sorted = edges.clone();
            sorted.sort_by(f64::total_cmp);
            if let Some(w) = sorted.windows(2).find(|w| w[1] <= w[0]) {
                return Err(PlotError::invalid("bins", format!("bin edge {} appears more than once", w[0])));
            }
            sorted
        }
    };

    if !log_x {
        return Ok(edges);
    }
    let first = edges[0];
    let last = edges[edges.len() - 1];
    if first <= 0.0 {
        return Err(PlotError::DegenerateData(format!(
            "log-scaled bins need a positive lower edge, got {first}"
        )));
    }
    Ok(logspace(first, last, edges.len()))
}

/// Index of the bin containing `v`, if any.
fn bin_index(edges: &[f64], v: f64) -> Option<usize> {
    let n = edges.len() - 1;
    if v.is_nan() || v < edges[0] || v > edges[n] {
        return None;
    }
    if v == edges[n] {
        return Some(n - 1);
    }
    // First edge strictly greater than v, minus one.
    let upper = edges.partition_point(|e| *e <= v);
    Some(upper.saturating_sub(1).min(n - 1))
}

/// Raw counts per bin.
pub fn counts(samples: &[f64], edges: &[f64]) -> Vec<f64> {
    if edges.len() < 2 {
        return Vec::new();
    }
    let mut out = vec![0.0; edges.len() - 1];
    for &v in samples {
        if let Some(i) = bin_index(edges, v) {
            out[i] += 1.0;
        }
    }
    out
}

/// Bar heights for one series: counts, optionally normalized to a density and accumulated.
pub fn heights(samples: &[f64], edges: &[f64], density: bool, cumulative: Cumulative) -> Vec<f64> {
    let raw = counts(samples, edges);
    let total: f64 = raw.iter().sum();
    let widths: Vec<f64> = edges.windows(2).map(|w| w[1] - w[0]).collect();

    let mut values: Vec<f64> = if density && total > 0.0 {
        raw.iter().zip(&widths).map(|(c, w)| c / (total * w)).collect()
    } else {
        raw
    };

    if cumulative.is_on() {
        // Accumulate bin masses; a density accumulates to 1.
        let mass: Vec<f64> = if density && total > 0.0 {
            values.iter().zip(&widths).map(|(d, w)| d * w).collect()
        } else {
            values.clone()
        };
        values = match cumulative {
            Cumulative::Forward => running_sum(mass.iter()),
            Cumulative::Reverse => {
                let mut v = running_sum(mass.iter().rev());
                v.reverse();
                v
            }
            Cumulative::Off => mass,
        };
    }
    values
}

fn running_sum<'a>(it: impl Iterator<Item = &'a f64>) -> Vec<f64> {
    let mut acc = 0.0;
    it.map(|v| {
        acc += v;
        acc
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_sample_falls_in_last_bin() {
        let edges = [0.0, 1.0, 2.0];
        assert_eq!(counts(&[0.0, 1.0, 2.0, 2.5, -1.0, f64::NAN], &edges), vec![1.0, 2.0]);
    }

    #[test]
    fn reverse_cumulative_runs_right_to_left() {
        let h = heights(&[0.5, 1.5, 1.6], &[0.0, 1.0, 2.0], false, Cumulative::Reverse);
        assert_eq!(h, vec![3.0, 2.0]);
    }

    #[test]
    fn cumulative_density_ends_at_one() {
        let h = heights(&[0.5, 1.5, 1.6, 3.9], &[0.0, 1.0, 2.0, 4.0], true, Cumulative::Forward);
        assert!((h[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cumulative_flags_deserialize() {
        let c: Cumulative = serde_json::from_str("true").unwrap();
        assert_eq!(c, Cumulative::Forward);
        let c: Cumulative = serde_json::from_str("-1").unwrap();
        assert_eq!(c, Cumulative::Reverse);
        let c: Cumulative = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(c, Cumulative::Off);
    }
}
