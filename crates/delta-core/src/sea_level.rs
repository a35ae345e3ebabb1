//! Sea-level trajectory synthesis.
//!
//! Builds the water-depth history η(t) from a baseline depth, a linear
//! trend, and up to two independent sinusoidal components:
//!
//!   η(t) = Z₀ + Ż·t + A₁·sin(2π·t/P₁) + A₂·sin(2π·t/P₂)
//!
//! Purely elementwise over the time axis; no cross-sample dependency.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::timeseries::TimeSeries;

/// One oscillatory sea-level component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SinusoidParams {
    /// Amplitude A (same units as water depth).
    pub amplitude: f64,
    /// Period P in time units. Non-positive disables the term.
    pub period: f64,
}

impl SinusoidParams {
    /// Contribution of this term at time `t`. Zero when the period is
    /// non-positive, which also guards the division below.
    fn eval(&self, t: f64) -> f64 {
        if self.period > 0.0 {
            self.amplitude * (2.0 * PI * t / self.period).sin()
        } else {
            0.0
        }
    }
}

/// Full sea-level history parameterisation. A `None` sinusoid is a
/// disabled term; there is no separate enabled flag to fall out of sync
/// with the amplitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeaLevelParams {
    /// Initial water depth Z₀.
    pub baseline: f64,
    /// Linear rate Ż (depth change per unit time, may be negative).
    pub linear_rate: f64,
    /// Short-term oscillation.
    pub sinusoid1: Option<SinusoidParams>,
    /// Long-term oscillation.
    pub sinusoid2: Option<SinusoidParams>,
}

impl Default for SeaLevelParams {
    fn default() -> Self {
        Self {
            baseline: 1.0,
            linear_rate: 0.3,
            sinusoid1: None,
            sinusoid2: None,
        }
    }
}

/// Synthesize η(t) over the given time axis.
///
/// Never fails: any finite parameter combination is accepted, and a
/// non-positive period simply contributes zero.
pub fn synthesize(params: &SeaLevelParams, time: &[f64]) -> TimeSeries {
    let values = time
        .iter()
        .map(|&t| {
            let mut eta = params.baseline + params.linear_rate * t;
            if let Some(s1) = params.sinusoid1 {
                eta += s1.eval(t);
            }
            if let Some(s2) = params.sinusoid2 {
                eta += s2.eval(t);
            }
            eta
        })
        .collect();
    TimeSeries::new(time.to_vec(), values)
}
