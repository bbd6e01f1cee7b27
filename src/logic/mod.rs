pub mod recommendations;
pub mod rules;
pub mod scorer;

pub use recommendations::recommendations;
pub use scorer::{evaluate, SoilScorer};
