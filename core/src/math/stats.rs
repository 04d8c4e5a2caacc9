pub struct StatsHelper;

impl StatsHelper {
    /// Absolute value of each transform estimate, as plotted against `s`.
    pub fn magnitudes(values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| v.abs()).collect()
    }

    /// Finite minimum and maximum, or `None` when nothing is finite.
    pub fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |bounds, v| match bounds {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
