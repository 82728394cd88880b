//! Catch Module
//!
//! The catch probability algorithm and its injectable random source.

mod random;
mod simulator;

pub use random::{RandomSource, RngSource};
pub use simulator::{attempt_catch, CatchOutcome, CatchResult, DRAW_UPPER, MAX_ATTEMPTS};
