// File: crates/prettyplot-core/tests/histogram.rs
// Purpose: Bin edge construction, counting conventions and cumulative/density variants.

use approx::assert_relative_eq;
use prettyplot_core::histogram::{bin_edges, counts, heights, MAX_BINS};
use prettyplot_core::{Bins, Cumulative, PlotError};

#[test]
fn three_bins_over_small_sample() {
    let x = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
    let edges = bin_edges(&x, &Bins::Count(3), false).unwrap();
    let want = [1.0, 5.0 / 3.0, 7.0 / 3.0, 3.0];
    assert_eq!(edges.len(), want.len());
    for (got, want) in edges.iter().zip(want) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
    assert_eq!(counts(&x, &edges), vec![1.0, 2.0, 3.0]);
}

#[test]
fn ten_bins_span_exactly_min_to_max() {
    let x: Vec<f64> = (1..=50).map(|i| i as f64 * 0.37).collect();
    let edges = bin_edges(&x, &Bins::Count(10), false).unwrap();
    assert_eq!(edges.len(), 11);
    assert_eq!(edges[0], 0.37);
    assert_eq!(edges[10], 50.0 * 0.37);
    let width = edges[1] - edges[0];
    for w in edges.windows(2) {
        assert_relative_eq!(w[1] - w[0], width, epsilon = 1e-9);
    }
}

#[test]
fn log_bins_are_geometric_over_the_same_range() {
    let x = [1.0, 3.0, 10.0, 30.0, 100.0];
    let edges = bin_edges(&x, &Bins::Count(2), true).unwrap();
    assert_eq!(edges.len(), 3);
    assert_relative_eq!(edges[0], 1.0);
    assert_relative_eq!(edges[1], 10.0, epsilon = 1e-9);
    assert_relative_eq!(edges[2], 100.0);
}

#[test]
fn ten_log_bins_have_a_constant_ratio() {
    let x: Vec<f64> = (0..40).map(|i| 2.0 * 1.25f64.powi(i)).collect();
    let (lo, hi) = (x[0], x[39]);
    let edges = bin_edges(&x, &Bins::Count(10), true).unwrap();
    assert_eq!(edges.len(), 11);
    assert_eq!(edges[0], lo);
    assert_eq!(edges[10], hi);
    let ratio = (hi / lo).powf(0.1);
    for w in edges.windows(2) {
        assert_relative_eq!(w[1] / w[0], ratio, epsilon = 1e-9);
    }
}

#[test]
fn explicit_edges_become_log_spaced_between_first_and_last() {
    let edges = bin_edges(&[], &Bins::Edges(vec![1.0, 5.0, 1000.0]), true).unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], 1.0);
    assert_relative_eq!(edges[1], 1000f64.sqrt(), epsilon = 1e-9);
    assert_eq!(edges[2], 1000.0);
}

#[test]
fn log_bins_need_a_positive_lower_edge() {
    let err = bin_edges(&[0.0, 1.0, 2.0], &Bins::Count(4), true).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateData(_)));
}

#[test]
fn explicit_edges_are_sorted() {
    let edges = bin_edges(&[], &Bins::Edges(vec![3.0, 1.0, 2.0]), false).unwrap();
    assert_eq!(edges, vec![1.0, 2.0, 3.0]);
}

#[test]
fn bad_bin_specs_are_configuration_errors() {
    assert!(bin_edges(&[1.0, 2.0], &Bins::Count(0), false).unwrap_err().is_configuration());
    assert!(bin_edges(&[1.0], &Bins::Edges(vec![1.0]), false).unwrap_err().is_configuration());
    assert!(bin_edges(&[1.0], &Bins::Edges(vec![0.0, f64::NAN]), false).unwrap_err().is_configuration());
}

#[test]
fn huge_bin_counts_are_rejected() {
    assert!(bin_edges(&[1.0, 2.0], &Bins::Count(usize::MAX), false).unwrap_err().is_configuration());
    assert!(bin_edges(&[1.0, 2.0], &Bins::Count(MAX_BINS + 1), false).unwrap_err().is_configuration());
    assert_eq!(bin_edges(&[1.0, 2.0], &Bins::Count(MAX_BINS), false).unwrap().len(), MAX_BINS + 1);
}

#[test]
fn repeated_edges_are_rejected() {
    let err = bin_edges(&[0.5], &Bins::Edges(vec![0.0, 1.0, 1.0, 2.0]), false).unwrap_err();
    assert!(matches!(err, PlotError::InvalidOption { option: "bins", .. }), "{err:?}");
}

#[test]
fn zero_range_or_empty_series_is_degenerate() {
    let err = bin_edges(&[2.0, 2.0, 2.0], &Bins::Count(5), false).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateData(_)));
    let err = bin_edges(&[], &Bins::Count(5), false).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateData(_)));
}

#[test]
fn density_integrates_to_one() {
    let x = [0.1, 0.2, 1.5, 2.5, 2.6, 3.9];
    let edges = [0.0, 1.0, 2.0, 4.0];
    let d = heights(&x, &edges, true, Cumulative::Off);
    let area: f64 = d.iter().zip(edges.windows(2)).map(|(h, w)| h * (w[1] - w[0])).sum();
    assert_relative_eq!(area, 1.0, epsilon = 1e-12);
}

#[test]
fn forward_and_reverse_accumulation() {
    let x = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
    let edges = bin_edges(&x, &Bins::Count(3), false).unwrap();
    assert_eq!(heights(&x, &edges, false, Cumulative::Forward), vec![1.0, 3.0, 6.0]);
    assert_eq!(heights(&x, &edges, false, Cumulative::Reverse), vec![6.0, 5.0, 3.0]);
}
