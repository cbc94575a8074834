//! Named betting propositions.

use alloc::string::String;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A named bet proposition with fixed odds-to-1 payout.
///
/// Identity is the name alone: equality, hashing and ordering ignore `odds`.
/// On a real table each name denotes exactly one payout, so two outcomes
/// sharing a name with different odds is a construction error, which
/// [`Wheel::add_outcome`](crate::Wheel::add_outcome) reports under
/// [`OddsPolicy::Strict`](crate::OddsPolicy::Strict).
///
/// ```
/// use roulette::Outcome;
///
/// let red = Outcome::new("Red", 1);
/// assert_eq!(red, Outcome::new("Red", 2));
/// assert_eq!(red.to_string(), "Red (1:1)");
/// ```
#[derive(Debug, Clone)]
pub struct Outcome {
    name: String,
    odds: usize,
}

impl Outcome {
    /// Creates a new outcome.
    #[must_use]
    pub fn new(name: impl Into<String>, odds: usize) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }

    /// Returns the name of the outcome.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payout odds (odds-to-1).
    #[must_use]
    pub const fn odds(&self) -> usize {
        self.odds
    }

    /// Returns the profit paid on `stake`, excluding the stake itself.
    #[must_use]
    pub const fn win_amount(&self, stake: usize) -> usize {
        self.odds.saturating_mul(stake)
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Outcome {}

// Must hash exactly like `str` so `Borrow<str>` lookups agree.
impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_str().hash(state);
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Borrow<str> for Outcome {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}
