use thiserror::Error;

/// Rejection of out-of-domain scalar parameters at the entry boundary.
///
/// The model pipeline itself never faults: once parameters pass this
/// gate, every condition downstream (invalid slope ordering, degenerate
/// samples) is expressed in the result, not raised.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("sediment supply rate must be positive, got {0}")]
    NonPositiveSupplyRate(f64),
    #[error("simulation duration must be positive, got {0}")]
    NonPositiveDuration(f64),
}
