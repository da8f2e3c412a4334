pub mod global_state;
pub use global_state::*;
