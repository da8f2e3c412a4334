pub mod initialize;
pub use initialize::*;

pub mod swallow;
pub use swallow::*;
