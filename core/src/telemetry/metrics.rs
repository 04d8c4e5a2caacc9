use std::sync::Mutex;

/// Counts completed and rejected estimates.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    estimates: usize,
    rejections: usize,
    points: usize,
}

/// Point-in-time copy of the recorder counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub estimates: usize,
    pub rejections: usize,
    pub points: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                estimates: 0,
                rejections: 0,
                points: 0,
            }),
        }
    }

    pub fn record_estimate(&self, points: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.estimates += 1;
            metrics.points += points;
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejections += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                estimates: metrics.estimates,
                rejections: metrics.rejections,
                points: metrics.points,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_accumulates_counts() {
        let recorder = MetricsRecorder::new();
        recorder.record_estimate(50);
        recorder.record_estimate(3);
        recorder.record_rejection();
        assert_eq!(
            recorder.snapshot(),
            MetricsSnapshot {
                estimates: 2,
                rejections: 1,
                points: 53,
            }
        );
    }
}
