pub mod branch;
pub mod legion;
pub mod step;
pub mod tree;

pub use branch::*;
pub use legion::*;
pub use step::*;
pub use tree::*;
