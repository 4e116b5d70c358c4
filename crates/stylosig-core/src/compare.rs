//! Signature comparison.

/// Mean absolute difference between two component vectors.
///
/// Only the first `min(a.len(), b.len())` components are compared, and two
/// vectors with nothing in common score `0.0`. Lower means more similar; the
/// score has no upper bound.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let total: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    total / n as f64
}
