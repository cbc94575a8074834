//! Construction of the standard American bet catalogue.
//!
//! [`BinBuilder`] enumerates every bet category on the 3×12 table layout and
//! attaches each outcome to the bins it covers. Row `r` (0-based) holds the
//! numbers `3r + 1`, `3r + 2` and `3r + 3`.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::WheelError;
use crate::options::WheelOptions;
use crate::outcome::Outcome;
use crate::wheel::{DOUBLE_ZERO, Wheel};

/// Odds paid on a single number.
pub const STRAIGHT_ODDS: usize = 35;
/// Odds paid on two adjacent numbers.
pub const SPLIT_ODDS: usize = 17;
/// Odds paid on a row of three numbers.
pub const STREET_ODDS: usize = 11;
/// Odds paid on a 2×2 block of numbers.
pub const CORNER_ODDS: usize = 8;
/// Odds paid on two adjacent rows.
pub const LINE_ODDS: usize = 5;
/// Odds paid on a dozen.
pub const DOZEN_ODDS: usize = 2;
/// Odds paid on a column.
pub const COLUMN_ODDS: usize = 2;
/// Odds paid on low/high, even/odd and red/black.
pub const EVEN_MONEY_ODDS: usize = 1;
/// Odds paid on the 0-00-1-2-3 basket.
pub const FIVE_BET_ODDS: usize = 6;

/// The red numbers; every other number from 1 to 36 is black.
pub const RED_NUMBERS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

const ROWS: usize = 12;

/// Populates a [`Wheel`] with every standard bet.
///
/// The builder is stateless and deterministic: every run produces the same
/// names, odds and bin memberships.
///
/// ```
/// use roulette::{BIN_COUNT, BinBuilder, WheelOptions};
///
/// let wheel = BinBuilder::build_wheel(WheelOptions::default(), 1)?;
/// assert!((0..BIN_COUNT).all(|n| !wheel.bins()[n].is_empty()));
/// # Ok::<(), roulette::WheelError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BinBuilder;

impl BinBuilder {
    /// Creates a new builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates a wheel seeded with `seed` and populates all of its bins.
    ///
    /// # Errors
    ///
    /// Propagates any [`WheelError`] raised while adding outcomes.
    pub fn build_wheel(options: WheelOptions, seed: u64) -> Result<Wheel, WheelError> {
        let mut wheel = Wheel::new(options, seed);
        Self::new().build_bins(&mut wheel)?;
        Ok(wheel)
    }

    /// Runs every bet category against `wheel`.
    ///
    /// Intended to run once on an empty wheel. Running it again adds nothing,
    /// since bins ignore outcomes they already hold.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::OddsMismatch`] if `wheel` already holds one of
    /// the standard names at different odds under a strict policy.
    pub fn build_bins(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        self.straight(wheel)?;
        self.split(wheel)?;
        self.street(wheel)?;
        self.corner(wheel)?;
        self.line(wheel)?;
        self.dozen(wheel)?;
        self.column(wheel)?;
        self.even_money(wheel)?;
        self.five(wheel)?;

        tracing::debug!(outcomes = wheel.outcome_count(), "bins built");
        Ok(())
    }

    /// Adds one straight bet per number, including 00.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn straight(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for n in 0..DOUBLE_ZERO {
            attach(wheel, &format!("Straight {n}"), STRAIGHT_ODDS, [n])?;
        }
        attach(wheel, "Straight 00", STRAIGHT_ODDS, [DOUBLE_ZERO])
    }

    /// Adds splits between horizontal and vertical neighbours.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn split(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for row in 0..ROWS {
            for n in [3 * row + 1, 3 * row + 2] {
                attach(wheel, &join("Split", &[n, n + 1]), SPLIT_ODDS, [n, n + 1])?;
            }
        }
        for n in 1..=33 {
            attach(wheel, &join("Split", &[n, n + 3]), SPLIT_ODDS, [n, n + 3])?;
        }
        Ok(())
    }

    /// Adds one street per row.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn street(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for row in 0..ROWS {
            let numbers = [3 * row + 1, 3 * row + 2, 3 * row + 3];
            attach(wheel, &join("Street", &numbers), STREET_ODDS, numbers)?;
        }
        Ok(())
    }

    /// Adds the two corners straddling each pair of adjacent rows.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn corner(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for row in 0..ROWS - 1 {
            for n in [3 * row + 1, 3 * row + 2] {
                let numbers = [n, n + 1, n + 3, n + 4];
                attach(wheel, &join("Corner", &numbers), CORNER_ODDS, numbers)?;
            }
        }
        Ok(())
    }

    /// Adds one six-number line per pair of adjacent rows.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn line(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for row in 0..ROWS - 1 {
            let first = 3 * row + 1;
            let numbers: [usize; 6] = core::array::from_fn(|i| first + i);
            attach(wheel, &join("Line", &numbers), LINE_ODDS, numbers)?;
        }
        Ok(())
    }

    /// Adds the three dozens.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn dozen(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for d in 0..3 {
            let numbers = (1..=12).map(|n| 12 * d + n);
            attach(wheel, &format!("Dozen {}", d + 1), DOZEN_ODDS, numbers)?;
        }
        Ok(())
    }

    /// Adds the three columns.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn column(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for c in 1..=3 {
            let numbers = (0..ROWS).map(|row| 3 * row + c);
            attach(wheel, &format!("Column {c}"), COLUMN_ODDS, numbers)?;
        }
        Ok(())
    }

    /// Adds low/high, even/odd and red/black to every number from 1 to 36.
    /// 0 and 00 get none of them.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn even_money(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        for n in 1..=36 {
            let half = if n <= 18 { "Low" } else { "High" };
            let parity = if n % 2 == 0 { "Even" } else { "Odd" };
            let color = if RED_NUMBERS.contains(&n) { "Red" } else { "Black" };

            for name in [half, parity, color] {
                attach(wheel, name, EVEN_MONEY_ODDS, [n])?;
            }
        }
        Ok(())
    }

    /// Adds the five-number basket covering 0, 00, 1, 2 and 3.
    ///
    /// # Errors
    ///
    /// See [`BinBuilder::build_bins`].
    pub fn five(&self, wheel: &mut Wheel) -> Result<(), WheelError> {
        attach(wheel, "Five Bet", FIVE_BET_ODDS, [0, 1, 2, 3, DOUBLE_ZERO])
    }
}

fn attach(
    wheel: &mut Wheel,
    name: &str,
    odds: usize,
    bins: impl IntoIterator<Item = usize>,
) -> Result<(), WheelError> {
    let outcome = Outcome::new(name, odds);
    for index in bins {
        wheel.add_outcome(index, outcome.clone())?;
    }
    Ok(())
}

/// Formats e.g. `Corner 1-2-4-5`.
fn join(kind: &str, numbers: &[usize]) -> String {
    let numbers: Vec<String> = numbers.iter().map(ToString::to_string).collect();
    format!("{kind} {}", numbers.join("-"))
}
