//! Numerical Laplace transform estimation for the rocket intercept demo.
//!
//! The estimator evaluates a (possibly noisy) target signal once over a
//! uniform time grid and sums it against `e^{-st}` for each requested `s`.
//! The `scene` module carries the cosmetic radar/missile geometry drawn next
//! to the transform plot.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod scene;
pub mod signal;
pub mod telemetry;

pub use prelude::{EstimatorConfig, OverflowPolicy, Signal, TransformError, TransformResult};
pub use processing::{estimate, LaplaceEstimator};
