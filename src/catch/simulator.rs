//! Catch Simulator
//!
//! Decides whether a thrown ball catches a creature. Each attempt draws a
//! number in `[0, 100)` and subtracts it from the creature's base
//! experience; the catch succeeds once nothing remains.

use tracing::debug;

use crate::catch::RandomSource;
use crate::error::{PokedexError, Result};

/// Attempts available per catch command.
pub const MAX_ATTEMPTS: u32 = 3;

/// Exclusive upper bound of a single draw.
pub const DRAW_UPPER: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchResult {
    Caught,
    Escaped,
}

/// Result of one catch command, with the trail of draws for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchOutcome {
    pub result: CatchResult,
    /// Base experience left after the last attempt; zero or below when caught
    pub remaining: i64,
    /// Attempts actually consumed
    pub attempts: u32,
    /// Draw of each attempt, in order
    pub draws: Vec<u32>,
}

impl CatchOutcome {
    pub fn is_caught(&self) -> bool {
        self.result == CatchResult::Caught
    }
}

// == Attempt Catch ==
/// Runs up to [`MAX_ATTEMPTS`] attempts against `base_experience`.
///
/// A base experience of zero is caught without drawing at all.
///
/// # Errors
/// `InvalidArgument` if `base_experience` is negative.
pub fn attempt_catch<S: RandomSource + ?Sized>(
    base_experience: i64,
    source: &mut S,
) -> Result<CatchOutcome> {
    if base_experience < 0 {
        return Err(PokedexError::InvalidArgument(format!(
            "base experience must be non-negative, got {}",
            base_experience
        )));
    }

    let mut remaining = base_experience;
    let mut draws = Vec::with_capacity(MAX_ATTEMPTS as usize);

    while remaining > 0 && (draws.len() as u32) < MAX_ATTEMPTS {
        let draw = source.next_below(DRAW_UPPER);
        debug!(
            attempt = draws.len() + 1,
            remaining, draw, "catch attempt"
        );
        remaining -= i64::from(draw);
        draws.push(draw);
    }

    let result = if remaining <= 0 {
        CatchResult::Caught
    } else {
        CatchResult::Escaped
    };

    Ok(CatchOutcome {
        result,
        remaining,
        attempts: draws.len() as u32,
        draws,
    })
}
