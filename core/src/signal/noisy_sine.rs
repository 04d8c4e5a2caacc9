use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};

use crate::prelude::Signal;

/// Parameters of `amplitude * sin(frequency * t) + noise * N(0, 1)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoisySineConfig {
    pub amplitude: f64,
    /// Angular frequency in rad/s.
    pub frequency: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise: f64,
    /// Fixed seed for a reproducible realization; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for NoisySineConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            noise: 0.1,
            seed: None,
        }
    }
}

/// Sine target trajectory with white Gaussian jitter.
pub struct NoisySine {
    amplitude: f64,
    frequency: f64,
    noise: Normal<f64>,
    rng: StdRng,
}

impl NoisySine {
    pub fn new(config: &NoisySineConfig) -> Result<Self, NormalError> {
        if config.noise.is_nan() || config.noise < 0.0 {
            return Err(NormalError::BadVariance);
        }
        let noise = Normal::new(0.0, config.noise)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            amplitude: config.amplitude,
            frequency: config.frequency,
            noise,
            rng,
        })
    }
}

impl Signal for NoisySine {
    fn sample(&mut self, times: &[f64]) -> Vec<f64> {
        times
            .iter()
            .map(|&t| {
                self.amplitude * (self.frequency * t).sin() + self.noise.sample(&mut self.rng)
            })
            .collect()
    }
}
