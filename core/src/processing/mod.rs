pub mod laplace;

pub use laplace::{estimate, LaplaceEstimator};
