use ndarray::Array1;

use crate::prelude::{TransformError, TransformResult};

/// Relative distance from an integer below which `t_max / dt` is snapped to it.
const STEP_SNAP: f64 = 1e-9;

/// Uniform time grid `0, dt, 2dt, ...` up to and including `t_max` when it
/// falls on a step.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    times: Array1<f64>,
    dt: f64,
}

impl TimeGrid {
    pub fn new(t_max: f64, dt: f64) -> TransformResult<Self> {
        let steps = step_count(t_max, dt)?;
        let times = Array1::from_shape_fn(steps + 1, |i| i as f64 * dt);
        Ok(Self { times, dt })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn as_slice(&self) -> &[f64] {
        // Built by `from_shape_fn`, so always contiguous.
        self.times.as_slice().unwrap_or(&[])
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }
}

/// Number of whole steps of `dt` that fit in `t_max`, i.e. `floor(t_max / dt)`.
fn step_count(t_max: f64, dt: f64) -> TransformResult<usize> {
    let degenerate = TransformError::DegenerateGrid { t_max, dt };
    if !(t_max.is_finite() && dt.is_finite()) || t_max <= 0.0 || dt <= 0.0 || dt > t_max {
        return Err(degenerate);
    }

    let ratio = t_max / dt;
    let nearest = ratio.round();
    let steps = if (ratio - nearest).abs() <= STEP_SNAP * nearest.max(1.0) {
        nearest
    } else {
        ratio.floor()
    };

    if steps >= usize::MAX as f64 {
        return Err(degenerate);
    }
    Ok(steps as usize)
}

/// `count` evenly spaced values over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_floor_plus_one_points() {
        let grid = TimeGrid::new(1.0, 0.3).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.as_slice()[0], 0.0);
        assert!(grid.as_slice().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn grid_snaps_near_integer_ratios() {
        assert_eq!(TimeGrid::new(6.0, 0.001).unwrap().len(), 6001);
        assert_eq!(TimeGrid::new(10.0, 0.01).unwrap().len(), 1001);
        assert_eq!(TimeGrid::new(1.0, 0.1).unwrap().len(), 11);
    }

    #[test]
    fn grid_with_single_step_has_two_points() {
        let grid = TimeGrid::new(2.5, 2.5).unwrap();
        assert_eq!(grid.as_slice(), &[0.0, 2.5]);
    }

    #[test]
    fn grid_rejects_degenerate_inputs() {
        for (t_max, dt) in [
            (1.0, 0.0),
            (1.0, -0.1),
            (0.0, 0.1),
            (0.5, 1.0),
            (f64::NAN, 0.1),
            (1.0, f64::INFINITY),
        ] {
            assert!(matches!(
                TimeGrid::new(t_max, dt),
                Err(TransformError::DegenerateGrid { .. })
            ));
        }
    }

    #[test]
    fn linspace_matches_reference_sample_points() {
        let points = linspace(0.1, 5.0, 50);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], 0.1);
        assert_eq!(points[49], 5.0);
        assert!((points[1] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn linspace_handles_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
    }
}
