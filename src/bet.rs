//! Stakes placed on outcomes.

use core::fmt;

use crate::bin::Bin;
use crate::error::BetError;
use crate::outcome::Outcome;

/// An amount wagered on one [`Outcome`].
///
/// Bets are transient: they are resolved against a spun [`Bin`] and then
/// dropped. Neither the wheel nor the builder keeps them.
///
/// ```
/// use roulette::{Bet, Outcome};
///
/// let bet = Bet::new(32, Outcome::new("Five Bet", 6))?;
/// assert_eq!(bet.win_amount(), 224);
/// assert_eq!(bet.lose_amount(), 32);
/// assert_eq!(bet.to_string(), "32 on Five Bet (6:1)");
/// # Ok::<(), roulette::BetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    amount: usize,
    outcome: Outcome,
}

impl Bet {
    /// Places `amount` on `outcome`.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] if `amount` is zero.
    pub fn new(amount: usize, outcome: Outcome) -> Result<Self, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        Ok(Self { amount, outcome })
    }

    /// Returns the amount wagered.
    #[must_use]
    pub const fn amount(&self) -> usize {
        self.amount
    }

    /// Returns the outcome bet on.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns whether the bet wins when the ball lands in `bin`.
    #[must_use]
    pub fn wins_on(&self, bin: &Bin) -> bool {
        bin.contains(&self.outcome)
    }

    /// Returns the amount paid back on a win: the stake plus its winnings.
    #[must_use]
    pub const fn win_amount(&self) -> usize {
        self.outcome.win_amount(self.amount).saturating_add(self.amount)
    }

    /// Returns the amount forfeited on a loss.
    #[must_use]
    pub const fn lose_amount(&self) -> usize {
        self.amount
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}
