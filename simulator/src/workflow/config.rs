use anyhow::Context;
use laplacecore::math::linspace;
use laplacecore::signal::NoisySineConfig;
use laplacecore::{EstimatorConfig, OverflowPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub t_max: f64,
    pub dt: f64,
    pub s_start: f64,
    pub s_end: f64,
    pub s_count: usize,
    pub signal: NoisySineConfig,
    pub overflow: OverflowPolicy,
    pub output: PathBuf,
    pub title: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            t_max: 6.0,
            dt: 0.001,
            s_start: 0.1,
            s_end: 5.0,
            s_count: 50,
            signal: NoisySineConfig::default(),
            overflow: OverflowPolicy::default(),
            output: PathBuf::from("laplace_test.png"),
            title: "Hypersonic Interceptor vs Incoming Missile Simulation".into(),
        }
    }
}

impl DemoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading demo config {}", path_ref.display()))?;
        let config: DemoConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing demo config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, output: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if seed.is_some() {
            self.signal.seed = seed;
        }
        self
    }

    pub fn sample_points(&self) -> Vec<f64> {
        linspace(self.s_start, self.s_end, self.s_count)
    }

    pub fn to_estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig::new(self.t_max, self.dt).with_overflow(self.overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_matches_reference_run() {
        let cfg = DemoConfig::default();
        let points = cfg.sample_points();
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], 0.1);
        assert_eq!(points[49], 5.0);
        assert_eq!(cfg.to_estimator_config().dt, 0.001);
        assert_eq!(cfg.output, PathBuf::from("laplace_test.png"));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"t_max: 3.0\ns_count: 10\noverflow: saturate\nsignal:\n  noise: 0.0\n  seed: 5\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = DemoConfig::load(&path).unwrap();
        assert_eq!(cfg.t_max, 3.0);
        assert_eq!(cfg.dt, 0.001);
        assert_eq!(cfg.s_count, 10);
        assert_eq!(cfg.overflow, OverflowPolicy::Saturate);
        assert_eq!(cfg.signal.seed, Some(5));
        assert_eq!(cfg.signal.amplitude, 1.0);
    }

    #[test]
    fn overrides_replace_output_and_seed() {
        let cfg = DemoConfig::default().with_overrides(Some(PathBuf::from("out.png")), Some(9));
        assert_eq!(cfg.output, PathBuf::from("out.png"));
        assert_eq!(cfg.signal.seed, Some(9));

        let untouched = DemoConfig::default().with_overrides(None, None);
        assert_eq!(untouched.signal.seed, None);
    }
}
