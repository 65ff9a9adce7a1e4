pub mod creature;
pub mod names;
pub mod observation;
pub mod roster;

pub use creature::*;
pub use names::*;
pub use observation::*;
pub use roster::*;
