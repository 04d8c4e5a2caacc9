use crate::workflow::runner::WorkflowResult;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPoint {
    pub s: f64,
    pub value: f64,
    pub magnitude: f64,
}

/// JSON summary of one estimator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformReport {
    pub t_max: f64,
    pub dt: f64,
    pub points: Vec<ReportPoint>,
}

impl TransformReport {
    pub fn new(t_max: f64, dt: f64, result: &WorkflowResult) -> Self {
        let points = result
            .sample_points
            .iter()
            .zip(&result.transform)
            .zip(&result.magnitudes)
            .map(|((&s, &value), &magnitude)| ReportPoint {
                s,
                value,
                magnitude,
            })
            .collect();
        Self { t_max, dt, points }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let file = File::create(path_ref)
            .with_context(|| format!("creating report {}", path_ref.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("writing report {}", path_ref.display()))?;
        Ok(())
    }
}
