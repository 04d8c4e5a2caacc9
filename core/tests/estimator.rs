use laplacecore::math::TimeGrid;
use laplacecore::signal::{NoisySine, NoisySineConfig};
use laplacecore::{estimate, EstimatorConfig, LaplaceEstimator, TransformError};

fn zeros(t: &[f64]) -> Vec<f64> {
    vec![0.0; t.len()]
}

fn ones(t: &[f64]) -> Vec<f64> {
    vec![1.0; t.len()]
}

#[test]
fn grid_length_is_floor_ratio_plus_one() {
    for (t_max, dt, expected) in [(1.0, 0.25, 5), (1.0, 0.3, 4), (0.7, 0.7, 2), (3.0, 0.4, 8)] {
        let grid = TimeGrid::new(t_max, dt).unwrap();
        assert_eq!(grid.len(), expected, "t_max={} dt={}", t_max, dt);
        let times = grid.as_slice();
        assert_eq!(times[0], 0.0);
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn zero_signal_yields_zeros() {
    let points = [0.1, -3.0, 2.0, 2.0];
    let values = estimate(&mut zeros, &points, 4.0, 0.05).unwrap();
    assert_eq!(values, vec![0.0; points.len()]);
}

#[test]
fn empty_sample_points_yield_empty_result() {
    let values = estimate(&mut ones, &[], 6.0, 0.001).unwrap();
    assert!(values.is_empty());
}

#[test]
fn degenerate_grids_are_rejected() {
    for (t_max, dt) in [(1.0, 0.0), (1.0, -0.01), (0.0, 0.01), (1.0, 2.0)] {
        let err = estimate(&mut ones, &[1.0], t_max, dt).unwrap_err();
        assert_eq!(err, TransformError::DegenerateGrid { t_max, dt });
    }
}

#[test]
fn mismatched_signal_length_is_rejected() {
    let mut short = |t: &[f64]| vec![1.0; t.len() - 1];
    let err = estimate(&mut short, &[1.0], 1.0, 0.5).unwrap_err();
    assert_eq!(
        err,
        TransformError::LengthMismatch {
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn deterministic_signal_gives_identical_results() {
    let mut cosine = |t: &[f64]| t.iter().map(|v| v.cos()).collect::<Vec<_>>();
    let points = [0.5, 1.0, 1.5];
    let first = estimate(&mut cosine, &points, 5.0, 0.01).unwrap();
    let second = estimate(&mut cosine, &points, 5.0, 0.01).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unit_signal_at_s_one_matches_closed_form() {
    let values = estimate(&mut ones, &[1.0], 10.0, 0.01).unwrap();
    let expected = 1.0 - (-10.0_f64).exp();
    assert!((values[0] - expected).abs() < 1e-2, "got {}", values[0]);
}

#[test]
fn unit_signal_at_s_zero_approximates_horizon() {
    let values = estimate(&mut ones, &[0.0], 6.0, 0.001).unwrap();
    assert!((values[0] - 6.0).abs() < 2.0 * 0.001, "got {}", values[0]);
}

#[test]
fn noisy_reference_run_shares_one_realization() {
    let config = NoisySineConfig {
        seed: Some(2025),
        ..Default::default()
    };
    let points = [1.0, 1.0];
    let estimator = LaplaceEstimator::new(EstimatorConfig::new(6.0, 0.001));
    let mut signal = NoisySine::new(&config).unwrap();
    let values = estimator.estimate(&mut signal, &points).unwrap();
    // Repeated points only agree if the noise was drawn once.
    assert_eq!(values[0], values[1]);

    // sin(t) transforms to 1 / (s^2 + 1); the noise averages out at s = 1.
    assert!((values[0] - 0.5).abs() < 0.05, "got {}", values[0]);
}
