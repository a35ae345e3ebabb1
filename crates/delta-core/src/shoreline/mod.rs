//! Shoreline position models.
//!
//! Two closed-form box models map (sediment supply, η(t), t) to the
//! shoreline position:
//!
//! - `simple`:   X(t) = Qs·t / η(t)
//! - `advanced`: s(t) = −η(t)/S_b + √(2·Qs·t / (S_b·(α+β)))
//!
//! Both share the same masking policy: the formulas are evaluated only
//! where `η(t) > 0` and `t > 0`; everywhere else the sample is the anchor
//! value 0. This removes the 0/0 singularity at t = 0 and skips samples
//! where the water depth is non-positive, so consumers always see a
//! finite curve starting at the origin.

mod advanced;
mod simple;

pub use advanced::compute_advanced;
pub use simple::compute_simple;

/// The shared mask: a sample is computable only for positive depth and
/// positive time.
#[inline]
pub(crate) fn sample_is_computable(eta: f64, t: f64) -> bool {
    eta > 0.0 && t > 0.0
}
