use ndarray::Array1;

use crate::math::grid::TimeGrid;
use crate::prelude::{EstimatorConfig, OverflowPolicy, Signal, TransformError, TransformResult};
use crate::telemetry::{LogManager, MetricsRecorder};

/// Largest exponent whose `exp` is still finite.
const MAX_EXPONENT: f64 = 709.782_712_893_384;

/// Rectangle-rule estimator of the one-sided Laplace transform.
///
/// The signal is evaluated once per call and that realization is shared by
/// every sample point.
pub struct LaplaceEstimator {
    config: EstimatorConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl LaplaceEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Estimates `F(s) = Σ y(t_i) e^{-s t_i} dt` for each of `sample_points`.
    pub fn estimate<S>(&self, signal: &mut S, sample_points: &[f64]) -> TransformResult<Vec<f64>>
    where
        S: Signal + ?Sized,
    {
        let grid = match TimeGrid::new(self.config.t_max, self.config.dt) {
            Ok(grid) => grid,
            Err(err) => return Err(self.reject(err)),
        };

        let samples = signal.sample(grid.as_slice());
        if samples.len() != grid.len() {
            return Err(self.reject(TransformError::LengthMismatch {
                expected: grid.len(),
                actual: samples.len(),
            }));
        }
        let samples = Array1::from(samples);

        let mut values = Vec::with_capacity(sample_points.len());
        for &s in sample_points {
            let value = self.integrate(&grid, &samples, s);
            if !value.is_finite() {
                match self.config.overflow {
                    OverflowPolicy::Allow => {
                        self.logger
                            .warn(&format!("non-finite transform value {} at s={}", value, s));
                    }
                    OverflowPolicy::Reject | OverflowPolicy::Saturate => {
                        return Err(self.reject(TransformError::NonFinite { s }));
                    }
                }
            }
            values.push(value);
        }

        self.metrics.record_estimate(values.len());
        self.logger.record(&format!(
            "Laplace estimate over {} grid points for {} sample points",
            grid.len(),
            values.len()
        ));
        Ok(values)
    }

    fn integrate(&self, grid: &TimeGrid, samples: &Array1<f64>, s: f64) -> f64 {
        let saturate = self.config.overflow == OverflowPolicy::Saturate;
        let sum = grid
            .times()
            .iter()
            .zip(samples.iter())
            .fold(0.0_f64, |acc, (&t, &y)| {
                let exponent = -s * t;
                if saturate {
                    let term = (y * exponent.min(MAX_EXPONENT).exp()).clamp(f64::MIN, f64::MAX);
                    (acc + term).clamp(f64::MIN, f64::MAX)
                } else {
                    acc + y * exponent.exp()
                }
            });
        if saturate {
            (sum * grid.dt()).clamp(f64::MIN, f64::MAX)
        } else {
            sum * grid.dt()
        }
    }

    fn reject(&self, err: TransformError) -> TransformError {
        self.metrics.record_rejection();
        self.logger.detail(&format!("estimate rejected: {}", err));
        err
    }
}

pub fn estimate<S>(
    signal: &mut S,
    sample_points: &[f64],
    t_max: f64,
    dt: f64,
) -> TransformResult<Vec<f64>>
where
    S: Signal + ?Sized,
{
    LaplaceEstimator::new(EstimatorConfig::new(t_max, dt)).estimate(signal, sample_points)
}
