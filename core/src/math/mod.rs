pub mod grid;
pub mod stats;

pub use grid::{linspace, TimeGrid};
pub use stats::StatsHelper;
