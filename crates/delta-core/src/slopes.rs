//! Slope parameters for the advanced (topset/foreset/basement) model.
//!
//! The physical ordering constraint is `0 < topset < basement < foreset`:
//! the topset surface is gentler than the depositional basement, which is
//! gentler than the foreset (avalanche) face. Outside that domain the
//! derived α/β coefficients are ill-defined or negative, so validation
//! gates the whole computation rather than being checked per sample.

use serde::{Deserialize, Serialize};

/// Slopes of the three depositional surfaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlopeParams {
    /// Topset slope S_t.
    pub topset: f64,
    /// Basement slope S_b.
    pub basement: f64,
    /// Foreset slope S_f.
    pub foreset: f64,
}

/// Coefficients derived from a valid slope triple; constant for a run.
///
///   α = S_t / (S_b − S_t)
///   β = S_f / (S_f − S_b)
///   denom = S_b · (α + β)
///
/// All three are strictly positive once the ordering constraint holds.
#[derive(Debug, Clone, Copy)]
pub struct SlopeCoefficients {
    pub alpha: f64,
    pub beta: f64,
    pub denom: f64,
}

impl SlopeParams {
    pub fn new(topset: f64, basement: f64, foreset: f64) -> Self {
        Self {
            topset,
            basement,
            foreset,
        }
    }

    /// The ordering predicate: all positive and `topset < basement < foreset`.
    pub fn is_valid(&self) -> bool {
        self.topset > 0.0
            && self.basement > 0.0
            && self.foreset > 0.0
            && self.topset < self.basement
            && self.basement < self.foreset
    }

    /// Derive α, β, and the shared denominator. None when the ordering
    /// constraint fails, in which case no coefficient is meaningful.
    pub fn coefficients(&self) -> Option<SlopeCoefficients> {
        if !self.is_valid() {
            return None;
        }
        let alpha = self.topset / (self.basement - self.topset);
        let beta = self.foreset / (self.foreset - self.basement);
        Some(SlopeCoefficients {
            alpha,
            beta,
            denom: self.basement * (alpha + beta),
        })
    }
}

impl Default for SlopeParams {
    fn default() -> Self {
        Self {
            topset: 0.01,
            basement: 0.05,
            foreset: 0.1,
        }
    }
}
