use crate::workflow::config::DemoConfig;
use anyhow::Context;
use laplacecore::math::StatsHelper;
use laplacecore::signal::NoisySine;
use laplacecore::{LaplaceEstimator, Signal};

pub struct WorkflowResult {
    pub sample_points: Vec<f64>,
    pub transform: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

#[derive(Clone)]
pub struct Runner {
    config: DemoConfig,
}

impl Runner {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Runs the estimator on the configured noisy sine target.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let mut signal =
            NoisySine::new(&self.config.signal).context("building target signal")?;
        self.execute_with(&mut signal)
    }

    pub fn execute_with<S>(&self, signal: &mut S) -> anyhow::Result<WorkflowResult>
    where
        S: Signal + ?Sized,
    {
        let sample_points = self.config.sample_points();
        let estimator = LaplaceEstimator::new(self.config.to_estimator_config());
        let transform = estimator
            .estimate(signal, &sample_points)
            .context("estimating Laplace transform")?;
        let magnitudes = StatsHelper::magnitudes(&transform);

        Ok(WorkflowResult {
            sample_points,
            transform,
            magnitudes,
        })
    }
}
