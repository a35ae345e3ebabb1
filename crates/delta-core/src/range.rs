//! Axis-range unification for side-by-side scenario comparison.
//!
//! Pure reductions over two series; the scenario order never changes the
//! result (min/max are commutative and associative).

use serde::{Deserialize, Serialize};

use crate::timeseries::TimeSeries;

/// Default symmetric padding applied to unified bounds.
pub const PAD_FACTOR: f64 = 1.1;

/// An inclusive axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Unified bounds over two series: padded NaN-aware min/max.
/// An empty or all-NaN series contributes 0 to either bound.
pub fn unify(a: &TimeSeries, b: &TimeSeries, pad_factor: f64) -> Range {
    let max = a.nanmax().unwrap_or(0.0).max(b.nanmax().unwrap_or(0.0));
    let min = a.nanmin().unwrap_or(0.0).min(b.nanmin().unwrap_or(0.0));
    Range {
        min: min * pad_factor,
        max: max * pad_factor,
    }
}

/// Shoreline variant of [`unify`]: a positive lower bound is forced to 0
/// so the curve's anchor at the origin stays visible.
pub fn unify_shoreline(a: &TimeSeries, b: &TimeSeries, pad_factor: f64) -> Range {
    let mut range = unify(a, b, pad_factor);
    if range.min > 0.0 {
        range.min = 0.0;
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> TimeSeries {
        let time = (0..values.len()).map(|i| i as f64).collect();
        TimeSeries::new(time, values.to_vec())
    }

    #[test]
    fn pads_both_bounds() {
        let a = series(&[-2.0, 5.0]);
        let b = series(&[1.0, 8.0]);
        let r = unify(&a, &b, 1.1);
        assert!((r.max - 8.8).abs() < 1e-12);
        assert!((r.min + 2.2).abs() < 1e-12);
    }

    #[test]
    fn is_commutative() {
        let a = series(&[-3.0, 7.0, f64::NAN]);
        let b = series(&[0.5, 12.0]);
        assert_eq!(unify(&a, &b, 1.1), unify(&b, &a, 1.1));
        assert_eq!(
            unify_shoreline(&a, &b, 1.1),
            unify_shoreline(&b, &a, 1.1)
        );
    }

    #[test]
    fn all_nan_series_contributes_zero() {
        let a = series(&[f64::NAN, f64::NAN]);
        let b = series(&[3.0, 8.0]);
        let r = unify(&a, &b, 1.1);
        assert_eq!(r.min, 0.0);
        assert!((r.max - 8.8).abs() < 1e-12);
    }

    #[test]
    fn two_nan_series_collapse_to_zero() {
        let a = series(&[f64::NAN]);
        let b = series(&[f64::NAN]);
        let r = unify(&a, &b, 1.1);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 0.0);
    }

    #[test]
    fn shoreline_lower_bound_is_never_positive() {
        let a = series(&[5.0, 20.0]);
        let b = series(&[8.0, 30.0]);
        let r = unify_shoreline(&a, &b, 1.1);
        assert_eq!(r.min, 0.0);
        assert!((r.max - 33.0).abs() < 1e-12);

        let c = series(&[-4.0, 20.0]);
        let r = unify_shoreline(&a, &c, 1.1);
        assert!(r.min <= 0.0);
        assert!((r.min + 4.4).abs() < 1e-12);
    }
}
