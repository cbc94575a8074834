//! The roulette wheel: 38 bins, the outcome registry, and the spin source.

use alloc::string::{String, ToString};
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::bin::Bin;
use crate::error::WheelError;
use crate::options::{OddsPolicy, WheelOptions};
use crate::outcome::Outcome;
use crate::sync::Mutex;

/// Number of bins on an American wheel (0 through 36, plus 00).
pub const BIN_COUNT: usize = 38;

/// Index of the bin for "00".
pub const DOUBLE_ZERO: usize = 37;

/// An American roulette wheel.
///
/// The wheel owns its bins, a registry holding one canonical [`Outcome`] per
/// name, and a seeded random source used by [`Wheel::next`]. It is filled
/// once, usually by [`BinBuilder`](crate::BinBuilder), and only spun
/// afterwards.
///
/// ```
/// use roulette::{BinBuilder, Wheel, WheelOptions};
///
/// let mut wheel = Wheel::new(WheelOptions::default(), 7);
/// BinBuilder::new().build_bins(&mut wheel)?;
///
/// let red = wheel.get_outcome("Red").cloned();
/// let spun = wheel.next();
/// let _won = red.is_some_and(|red| spun.contains(&red));
/// # Ok::<(), roulette::WheelError>(())
/// ```
pub struct Wheel {
    /// Bins indexed by wheel number, 00 at [`DOUBLE_ZERO`].
    bins: [Bin; BIN_COUNT],
    /// Canonical outcomes, looked up by name through `Borrow<str>`.
    outcomes: HashSet<Outcome>,
    /// Wheel options.
    options: WheelOptions,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Wheel {
    /// Creates an empty wheel whose spins are seeded with `seed`.
    #[must_use]
    pub fn new(options: WheelOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an empty wheel that spins with the given generator.
    #[must_use]
    pub fn from_rng(options: WheelOptions, rng: ChaCha8Rng) -> Self {
        Self {
            bins: core::array::from_fn(|_| Bin::new()),
            outcomes: HashSet::new(),
            options,
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the random source with one seeded from `seed`.
    ///
    /// Spins after a reseed replay the same sequence as a fresh wheel
    /// created with that seed.
    pub fn reseed(&self, seed: u64) {
        self.rng.with(|rng| *rng = ChaCha8Rng::seed_from_u64(seed));
    }

    /// Returns the wheel options.
    #[must_use]
    pub const fn options(&self) -> &WheelOptions {
        &self.options
    }

    /// Adds `outcome` to the bin at `index` and registers it by name.
    ///
    /// The first outcome registered under a name is canonical and is what
    /// every bin stores. Adding an outcome a bin already holds is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::BinOutOfRange`] if `index` is not below
    /// [`BIN_COUNT`], or [`WheelError::OddsMismatch`] if the name is already
    /// registered with different odds and the policy is
    /// [`OddsPolicy::Strict`]. The wheel is unchanged on error.
    pub fn add_outcome(&mut self, index: usize, outcome: Outcome) -> Result<(), WheelError> {
        if index >= BIN_COUNT {
            return Err(WheelError::BinOutOfRange { index });
        }

        let canonical = match self.outcomes.get(outcome.name()) {
            Some(registered) => {
                if registered.odds() != outcome.odds() {
                    match self.options.odds_policy {
                        OddsPolicy::Strict => {
                            return Err(WheelError::OddsMismatch {
                                name: outcome.name().to_string(),
                                registered: registered.odds(),
                                attempted: outcome.odds(),
                            });
                        }
                        OddsPolicy::Lenient => {
                            tracing::warn!(
                                name = outcome.name(),
                                registered = registered.odds(),
                                attempted = outcome.odds(),
                                "outcome odds diverge, keeping registered outcome"
                            );
                        }
                    }
                }
                registered.clone()
            }
            None => {
                tracing::trace!(
                    name = outcome.name(),
                    odds = outcome.odds(),
                    "outcome registered"
                );
                self.outcomes.insert(outcome.clone());
                outcome
            }
        };

        self.bins[index].insert(canonical);
        Ok(())
    }

    /// Spins the wheel, returning one of the 38 bins uniformly at random.
    pub fn next(&self) -> &Bin {
        let index = self.rng.with(|rng| rng.random_range(0..BIN_COUNT));
        &self.bins[index]
    }

    /// Returns the bin at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::BinOutOfRange`] if `index` is not below
    /// [`BIN_COUNT`].
    pub fn get(&self, index: usize) -> Result<&Bin, WheelError> {
        self.bins
            .get(index)
            .ok_or(WheelError::BinOutOfRange { index })
    }

    /// Returns all bins, 00 last.
    #[must_use]
    pub const fn bins(&self) -> &[Bin; BIN_COUNT] {
        &self.bins
    }

    /// Returns the registered outcome called `name`.
    ///
    /// Returns `None` if no outcome with that name was ever added.
    #[must_use]
    pub fn get_outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.get(name)
    }

    /// Iterates over the registered outcomes in no particular order.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    /// Returns the number of distinct outcomes registered.
    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns the number printed on the bin at `index` ("00" for
    /// [`DOUBLE_ZERO`]), or `None` if `index` is out of range.
    #[must_use]
    pub fn bin_label(index: usize) -> Option<String> {
        match index {
            DOUBLE_ZERO => Some(String::from("00")),
            0..DOUBLE_ZERO => Some(index.to_string()),
            _ => None,
        }
    }
}

impl fmt::Debug for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wheel")
            .field("bins", &self.bins)
            .field("outcomes", &self.outcomes.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
