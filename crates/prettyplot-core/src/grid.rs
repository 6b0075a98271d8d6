// File: crates/prettyplot-core/src/grid.rs
// Summary: Evenly spaced sample helpers used for bin edges and tick layout.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    out[steps - 1] = end;
    out
}

/// `steps` values from `start` to `end` (both > 0) evenly spaced in log10.
pub fn logspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    let mut out: Vec<f64> = linspace(start.log10(), end.log10(), steps)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect();
    // Pin the endpoints so the edges span the data range exactly.
    if let Some(first) = out.first_mut() { *first = start; }
    if let Some(last) = out.last_mut() { *last = end; }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(1.0, 3.0, 4);
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 3.0);
    }

    #[test]
    fn logspace_is_geometric() {
        let v = logspace(1.0, 1000.0, 4);
        for (got, want) in v.iter().zip([1.0, 10.0, 100.0, 1000.0]) {
            assert!((got - want).abs() < 1e-9 * want);
        }
    }
}
