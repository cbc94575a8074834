//! An American roulette table model with optional `no_std` support.
//!
//! The crate models the 38 bins of the wheel, the named [`Outcome`]s a player
//! can bet on, and the mapping between them. [`BinBuilder`] fills a
//! [`Wheel`] with the standard bet catalogue once; afterwards the wheel is
//! spun with [`Wheel::next`] and bets are settled by checking whether the
//! spun [`Bin`] contains their outcome.
//!
//! # Example
//!
//! ```
//! use roulette::{Bet, BinBuilder, WheelOptions};
//!
//! let wheel = BinBuilder::build_wheel(WheelOptions::default(), 42)?;
//! let red = wheel.get_outcome("Red").cloned().expect("red is on every table");
//! let bet = Bet::new(10, red).expect("stake is positive");
//!
//! let payout = if bet.wins_on(wheel.next()) {
//!     bet.win_amount()
//! } else {
//!     0
//! };
//! assert!(payout == 0 || payout == 20);
//! # Ok::<(), roulette::WheelError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod bin;
pub mod builder;
pub mod error;
pub mod options;
pub mod outcome;
pub mod wheel;
mod sync;

// Re-export main types
pub use bet::Bet;
pub use bin::Bin;
pub use builder::{
    BinBuilder, COLUMN_ODDS, CORNER_ODDS, DOZEN_ODDS, EVEN_MONEY_ODDS, FIVE_BET_ODDS, LINE_ODDS,
    RED_NUMBERS, SPLIT_ODDS, STRAIGHT_ODDS, STREET_ODDS,
};
pub use error::{BetError, WheelError};
pub use options::{OddsPolicy, WheelOptions};
pub use outcome::Outcome;
pub use wheel::{BIN_COUNT, DOUBLE_ZERO, Wheel};
