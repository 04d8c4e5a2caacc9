use serde::{Deserialize, Serialize};

/// How the estimator treats transform values that leave the finite range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail with [`TransformError::NonFinite`].
    #[default]
    Reject,
    /// Clamp exponents to `ln(f64::MAX)` and sums to `±f64::MAX`.
    Saturate,
    /// Return `inf`/`NaN` as computed and emit a warning.
    Allow,
}

/// Integration horizon and step shared by every estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub t_max: f64,
    pub dt: f64,
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl EstimatorConfig {
    pub fn new(t_max: f64, dt: f64) -> Self {
        Self {
            t_max,
            dt,
            overflow: OverflowPolicy::default(),
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

/// Common error type for transform estimation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("degenerate time grid: t_max={t_max}, dt={dt}")]
    DegenerateGrid { t_max: f64, dt: f64 },
    #[error("signal returned {actual} samples for a grid of {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("transform value at s={s} is not finite")]
    NonFinite { s: f64 },
}

pub type TransformResult<T> = Result<T, TransformError>;

/// Time-domain signal evaluated once over a whole time grid.
///
/// Implementations may be impure; the estimator never samples twice per call.
pub trait Signal {
    fn sample(&mut self, times: &[f64]) -> Vec<f64>;
}

impl<F> Signal for F
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    fn sample(&mut self, times: &[f64]) -> Vec<f64> {
        self(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_signals() {
        let mut doubled = |t: &[f64]| t.iter().map(|v| v * 2.0).collect::<Vec<_>>();
        assert_eq!(doubled.sample(&[0.0, 1.5]), vec![0.0, 3.0]);
    }

    #[test]
    fn overflow_policy_defaults_to_reject() {
        let config = EstimatorConfig::new(1.0, 0.1);
        assert_eq!(config.overflow, OverflowPolicy::Reject);
        let parsed: OverflowPolicy = serde_json::from_str("\"saturate\"").unwrap();
        assert_eq!(parsed, OverflowPolicy::Saturate);
    }
}
