// File: crates/prettyplot-core/src/data.rs
// Summary: Data sets to plot: XY series with optional error bars, X samples for histograms, 2D grids for images.
// Notes:
// - Constructors enforce length invariants; deserialization goes through the
//   same checks via `try_from`.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Error magnitudes attached to every point of a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorBar {
    /// Same distance below and above each point.
    Symmetric(Vec<f64>),
    /// Separate distances below (`lower`) and above (`upper`) each point.
    Asymmetric { lower: Vec<f64>, upper: Vec<f64> },
}

impl ErrorBar {
    /// `(below, above)` for point `i`.
    pub fn at(&self, i: usize) -> (f64, f64) {
        match self {
            ErrorBar::Symmetric(e) => (e[i], e[i]),
            ErrorBar::Asymmetric { lower, upper } => (lower[i], upper[i]),
        }
    }

    fn validate(&self, option: &'static str, n: usize) -> PlotResult<()> {
        let lists: Vec<&Vec<f64>> = match self {
            ErrorBar::Symmetric(e) => vec![e],
            ErrorBar::Asymmetric { lower, upper } => vec![lower, upper],
        };
        for list in lists {
            if list.len() != n {
                return Err(PlotError::invalid(
                    option,
                    format!("{} error values for {} points", list.len(), n),
                ));
            }
            if list.iter().any(|e| *e < 0.0 || e.is_nan()) {
                return Err(PlotError::invalid(option, "error magnitudes must be non-negative"));
            }
        }
        Ok(())
    }
}

/// An x/y data set for line and scatter plots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawXYData")]
pub struct XYData {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xerr: Option<ErrorBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    yerr: Option<ErrorBar>,
}

#[derive(Deserialize)]
struct RawXYData {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    xerr: Option<ErrorBar>,
    #[serde(default)]
    yerr: Option<ErrorBar>,
}

impl TryFrom<RawXYData> for XYData {
    type Error = PlotError;

    fn try_from(raw: RawXYData) -> PlotResult<Self> {
        let mut data = XYData::new(raw.x, raw.y)?;
        if let Some(xerr) = raw.xerr {
            data = data.with_xerr(xerr)?;
        }
        if let Some(yerr) = raw.yerr {
            data = data.with_yerr(yerr)?;
        }
        Ok(data)
    }
}

impl XYData {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PlotResult<Self> {
        if x.len() != y.len() {
            return Err(PlotError::invalid(
                "xy_data_sets",
                format!("x has {} values but y has {}", x.len(), y.len()),
            ));
        }
        Ok(Self { x, y, xerr: None, yerr: None })
    }

    /// Build from `(x, y)` pairs; cannot fail.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self { x, y, xerr: None, yerr: None }
    }

    pub fn with_xerr(mut self, xerr: ErrorBar) -> PlotResult<Self> {
        xerr.validate("xerr", self.x.len())?;
        self.xerr = Some(xerr);
        Ok(self)
    }

    pub fn with_yerr(mut self, yerr: ErrorBar) -> PlotResult<Self> {
        yerr.validate("yerr", self.y.len())?;
        self.yerr = Some(yerr);
        Ok(self)
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn xerr(&self) -> Option<&ErrorBar> { self.xerr.as_ref() }
    pub fn yerr(&self) -> Option<&ErrorBar> { self.yerr.as_ref() }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}

/// Samples for a histogram.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XData {
    x: Vec<f64>,
}

impl XData {
    pub fn new(x: Vec<f64>) -> Self {
        Self { x }
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Smallest and largest finite sample, `None` when there is none.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.x)
    }
}

impl From<Vec<f64>> for XData {
    fn from(x: Vec<f64>) -> Self {
        Self::new(x)
    }
}

/// Rectangular row-major grid of values for image plots. Row 0 is drawn on top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> PlotResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(PlotError::invalid(
                "z",
                format!("row {i} has {} columns, expected {cols}", row.len()),
            ));
        }
        let n_rows = rows.len();
        Ok(Self { rows: n_rows, cols, values: rows.into_iter().flatten().collect() })
    }

    /// Build a `rows x cols` grid from `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                values.push(f(r, c));
            }
        }
        Self { rows, cols, values }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn values(&self) -> &[f64] { &self.values }

    pub fn finite_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.values)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Grid {
    type Error = PlotError;

    fn try_from(rows: Vec<Vec<f64>>) -> PlotResult<Self> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<f64>> {
    fn from(grid: Grid) -> Self {
        if grid.cols == 0 {
            return vec![Vec::new(); grid.rows];
        }
        grid.values.chunks(grid.cols).map(<[f64]>::to_vec).collect()
    }
}

pub(crate) fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_length_mismatch_is_rejected() {
        assert!(XYData::new(vec![1.0, 2.0], vec![1.0]).is_err());
    }

    #[test]
    fn error_bar_length_must_match_points() {
        let xy = XYData::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        assert!(xy.clone().with_yerr(ErrorBar::Symmetric(vec![0.1])).is_err());
        let xy = xy
            .with_yerr(ErrorBar::Asymmetric { lower: vec![0.1, 0.2], upper: vec![0.3, 0.4] })
            .unwrap();
        assert_eq!(xy.yerr().unwrap().at(1), (0.2, 0.4));
    }

    #[test]
    fn ragged_grid_is_rejected() {
        assert!(Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
        let g = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, f64::NAN]]).unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
        assert_eq!(g.finite_range(), Some((1.0, 3.0)));
    }
}
