pub mod noisy_sine;

pub use noisy_sine::{NoisySine, NoisySineConfig};
