use super::sample_is_computable;
use crate::timeseries::TimeSeries;

/// Simple box model: X(t) = Qs·t / η(t) where η(t) > 0 and t > 0,
/// 0 elsewhere.
///
/// `sea_level` must share the given time axis.
pub fn compute_simple(supply_rate: f64, sea_level: &TimeSeries, time: &[f64]) -> TimeSeries {
    let values = time
        .iter()
        .zip(&sea_level.values)
        .map(|(&t, &eta)| {
            if sample_is_computable(eta, t) {
                supply_rate * t / eta
            } else {
                0.0
            }
        })
        .collect();
    TimeSeries::new(time.to_vec(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sea_level::{synthesize, SeaLevelParams};
    use crate::timeseries::uniform_axis;
    use approx::assert_relative_eq;

    fn linear_eta(baseline: f64, rate: f64, time: &[f64]) -> TimeSeries {
        synthesize(
            &SeaLevelParams {
                baseline,
                linear_rate: rate,
                sinusoid1: None,
                sinusoid2: None,
            },
            time,
        )
    }

    #[test]
    fn anchored_at_origin() {
        let t = uniform_axis(100.0, 500);
        let eta = linear_eta(1.0, 0.3, &t);
        let x = compute_simple(250.0, &eta, &t);
        assert_eq!(x.values[0], 0.0);
    }

    #[test]
    fn matches_formula_on_computable_samples() {
        let t = uniform_axis(100.0, 500);
        let eta = linear_eta(1.0, 0.3, &t);
        let x = compute_simple(250.0, &eta, &t);
        for i in 1..t.len() {
            assert_relative_eq!(
                x.values[i],
                250.0 * t[i] / eta.values[i],
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn end_of_default_scenario() {
        // Qs = 250, duration 100, η = 1 + 0.3·t → X(100) = 25000/31.
        let t = uniform_axis(100.0, 500);
        let eta = linear_eta(1.0, 0.3, &t);
        let x = compute_simple(250.0, &eta, &t);
        assert_relative_eq!(*x.values.last().unwrap(), 25_000.0 / 31.0, max_relative = 1e-10);
        assert_relative_eq!(*x.values.last().unwrap(), 806.45, max_relative = 1e-4);
    }

    #[test]
    fn non_positive_depth_masks_to_zero() {
        // Falling sea level: η crosses zero at t = 10 and is negative after.
        let t = uniform_axis(100.0, 500);
        let eta = linear_eta(1.0, -0.1, &t);
        let x = compute_simple(250.0, &eta, &t);
        for i in 0..t.len() {
            if eta.values[i] <= 0.0 {
                assert_eq!(x.values[i], 0.0, "masked sample at t = {}", t[i]);
            } else if t[i] > 0.0 {
                assert!(x.values[i] > 0.0);
            }
        }
        // The masked tail exists.
        assert!(eta.values.iter().any(|&v| v <= 0.0));
    }

    #[test]
    fn output_is_always_finite() {
        let t = uniform_axis(50.0, 500);
        let eta = linear_eta(0.0, 0.0, &t); // η ≡ 0: everything masked
        let x = compute_simple(100.0, &eta, &t);
        assert!(x.values.iter().all(|v| v.is_finite()));
        assert!(x.values.iter().all(|&v| v == 0.0));
    }
}
