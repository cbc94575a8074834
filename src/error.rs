//! Error types for wheel and bet operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while populating or querying a [`Wheel`](crate::Wheel).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    /// Bin index is outside `0..BIN_COUNT`.
    #[error("bin index {index} is out of range")]
    BinOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// An outcome was re-added under a registered name with different odds.
    #[error("outcome {name:?} is registered at {registered}:1, cannot add it at {attempted}:1")]
    OddsMismatch {
        /// Name shared by both outcomes.
        name: String,
        /// Odds of the registered outcome.
        registered: usize,
        /// Odds of the rejected outcome.
        attempted: usize,
    },
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}
