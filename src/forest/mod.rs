pub mod event;
pub mod forest;
pub mod handle;

pub use event::*;
pub use forest::*;
pub use handle::*;
