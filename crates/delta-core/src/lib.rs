//! Closed-form river-delta shoreline models under a prescribed sea-level
//! history.
//!
//! A scenario synthesizes a water-depth trajectory η(t) from linear and
//! sinusoidal components, then maps it to a shoreline position s(t) with
//! one of two box models (simple, or advanced with topset/foreset/
//! basement slopes). A range unifier derives shared axis bounds for
//! comparing two scenarios. Every stage is a pure function of its
//! inputs; the only failure mode surfaced to callers is the Advanced
//! model's slope-ordering gate, reported as `ModelResult::valid = false`
//! with an all-NaN shoreline.

pub mod error;
pub mod range;
pub mod scenario;
pub mod sea_level;
pub mod shoreline;
pub mod slopes;
pub mod timeseries;

pub use error::ParamError;
pub use range::{Range, PAD_FACTOR};
pub use scenario::{
    run_pair, run_scenario, unify_ranges, ModelResult, ScenarioParameters, ShorelineModel,
    UnifiedRanges, N_SAMPLES,
};
pub use sea_level::{SeaLevelParams, SinusoidParams};
pub use slopes::SlopeParams;
pub use timeseries::TimeSeries;
