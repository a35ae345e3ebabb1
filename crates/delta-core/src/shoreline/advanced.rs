use super::sample_is_computable;
use crate::slopes::SlopeParams;
use crate::timeseries::TimeSeries;

/// Advanced box model with topset, foreset, and basement slopes:
///
///   s(t) = −η(t)/S_b + √(2·Qs·t / denom),  denom = S_b·(α + β)
///
/// evaluated where η(t) > 0 and t > 0, 0 elsewhere. If the slope
/// ordering constraint fails, every sample is NaN; the caller flags the
/// whole result invalid rather than rendering a misleading curve.
pub fn compute_advanced(
    supply_rate: f64,
    sea_level: &TimeSeries,
    time: &[f64],
    slopes: &SlopeParams,
) -> TimeSeries {
    let Some(coeffs) = slopes.coefficients() else {
        return TimeSeries::nan_like(time);
    };

    let values = time
        .iter()
        .zip(&sea_level.values)
        .map(|(&t, &eta)| {
            if sample_is_computable(eta, t) {
                // The radicand is analytically non-negative on the valid
                // domain; the clamp only absorbs floating-point
                // cancellation near t ≈ 0.
                let arg = (2.0 * supply_rate * t / coeffs.denom).max(0.0);
                -eta / slopes.basement + arg.sqrt()
            } else {
                0.0
            }
        })
        .collect();
    TimeSeries::new(time.to_vec(), values)
}
