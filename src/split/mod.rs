pub mod certainty;
pub mod heuristic;
pub mod possible;
pub mod prediction;

pub use prediction::*;
