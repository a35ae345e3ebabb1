use serde::{Deserialize, Serialize};

/// A sampled curve over a shared, strictly increasing time axis.
/// Time and values are f64; `time` and `values` always have equal length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Pair a time axis with its samples.
    ///
    /// Panics if the lengths differ; callers always build `values` by
    /// mapping over `time`, so a mismatch is a programming error.
    pub fn new(time: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(
            time.len(),
            values.len(),
            "time axis and values must have equal length"
        );
        Self { time, values }
    }

    /// A series of NaN sentinels over the given axis (invalid-result shape).
    pub fn nan_like(time: &[f64]) -> Self {
        Self {
            time: time.to_vec(),
            values: vec![f64::NAN; time.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest finite value, ignoring NaN. None if empty or all-NaN.
    pub fn nanmin(&self) -> Option<f64> {
        let m = self
            .values
            .iter()
            .cloned()
            .filter(|v| !v.is_nan())
            .fold(f64::INFINITY, f64::min);
        m.is_finite().then_some(m)
    }

    /// Largest finite value, ignoring NaN. None if empty or all-NaN.
    pub fn nanmax(&self) -> Option<f64> {
        let m = self
            .values
            .iter()
            .cloned()
            .filter(|v| !v.is_nan())
            .fold(f64::NEG_INFINITY, f64::max);
        m.is_finite().then_some(m)
    }
}

/// Uniform time axis: `n` samples over `[0, duration]`, endpoints included.
///
/// Strictly increasing for any `duration > 0` and `n >= 2`.
pub fn uniform_axis(duration: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0.0];
    }
    let step = duration / (n - 1) as f64;
    (0..n).map(|i| i as f64 * step).collect()
}
