//! Scenario orchestrator: runs one full pipeline per scenario.
//!
//! Pipeline order per scenario:
//!   1. Uniform time axis over [0, duration]
//!   2. Sea-level synthesis η(t)
//!   3. Shoreline model (Simple or Advanced, gated by slope validation)
//! Range unification across two finished scenarios is the only join.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::range::{unify, unify_shoreline, Range, PAD_FACTOR};
use crate::sea_level::{synthesize, SeaLevelParams};
use crate::shoreline::{compute_advanced, compute_simple};
use crate::slopes::SlopeParams;
use crate::timeseries::{uniform_axis, TimeSeries};

// ── Sampling ─────────────────────────────────────────────────────────────────

/// Fixed number of samples per scenario; not a user parameter.
pub const N_SAMPLES: usize = 500;

// ── Parameters ───────────────────────────────────────────────────────────────

/// Which closed-form model maps η(t) to the shoreline position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ShorelineModel {
    /// X(t) = Qs·t / η(t).
    Simple,
    /// Topset/foreset/basement formulation with slope validation.
    Advanced(SlopeParams),
}

/// Complete input for one scenario. Immutable; the pipeline is a pure
/// function of this struct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Sediment supply rate Qs, must be positive.
    pub supply_rate: f64,
    /// Simulation duration, must be positive.
    pub duration: f64,
    pub model: ShorelineModel,
    pub sea_level: SeaLevelParams,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            supply_rate: 250.0,
            duration: 100.0,
            model: ShorelineModel::Simple,
            sea_level: SeaLevelParams::default(),
        }
    }
}

impl ScenarioParameters {
    /// Domain check for callers holding raw (e.g. deserialized) input.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.supply_rate <= 0.0 {
            return Err(ParamError::NonPositiveSupplyRate(self.supply_rate));
        }
        if self.duration <= 0.0 {
            return Err(ParamError::NonPositiveDuration(self.duration));
        }
        Ok(())
    }
}

// ── Results ──────────────────────────────────────────────────────────────────

/// Everything one scenario produces. `sea_level` and `shoreline` share
/// the `time` axis. `valid` is false only when the Advanced model's slope
/// ordering failed; the shoreline is then all-NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResult {
    pub time: Vec<f64>,
    pub sea_level: TimeSeries,
    pub shoreline: TimeSeries,
    pub valid: bool,
}

/// Unified plot bounds across two scenarios.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnifiedRanges {
    /// Shared time extent: [0, max(duration_a, duration_b)].
    pub time: Range,
    pub sea_level: Range,
    pub shoreline: Range,
}

// ── Orchestration ────────────────────────────────────────────────────────────

/// Run the full pipeline for one scenario.
pub fn run_scenario(params: &ScenarioParameters) -> ModelResult {
    let time = uniform_axis(params.duration, N_SAMPLES);
    let sea_level = synthesize(&params.sea_level, &time);

    let (shoreline, valid) = match params.model {
        ShorelineModel::Simple => (compute_simple(params.supply_rate, &sea_level, &time), true),
        ShorelineModel::Advanced(slopes) => (
            compute_advanced(params.supply_rate, &sea_level, &time, &slopes),
            slopes.is_valid(),
        ),
    };

    ModelResult {
        time,
        sea_level,
        shoreline,
        valid,
    }
}

/// Run two independent scenarios. With the `threading` feature the pair
/// is computed on rayon's pool; otherwise sequentially. Either way the
/// results are identical.
pub fn run_pair(a: &ScenarioParameters, b: &ScenarioParameters) -> (ModelResult, ModelResult) {
    #[cfg(feature = "threading")]
    {
        rayon::join(|| run_scenario(a), || run_scenario(b))
    }
    #[cfg(not(feature = "threading"))]
    {
        (run_scenario(a), run_scenario(b))
    }
}

/// Unified axis bounds for comparative plotting of two finished scenarios.
pub fn unify_ranges(a: &ModelResult, b: &ModelResult) -> UnifiedRanges {
    let t_max = a
        .time
        .last()
        .copied()
        .unwrap_or(0.0)
        .max(b.time.last().copied().unwrap_or(0.0));
    UnifiedRanges {
        time: Range { min: 0.0, max: t_max },
        sea_level: unify(&a.sea_level, &b.sea_level, PAD_FACTOR),
        shoreline: unify_shoreline(&a.shoreline, &b.shoreline, PAD_FACTOR),
    }
}
