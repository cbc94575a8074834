//! Wheel positions and the outcomes they pay.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::outcome::Outcome;

/// The set of outcomes that win when the ball lands on one wheel position.
///
/// A bin never holds two outcomes with the same name. Bins are filled by
/// [`Wheel::add_outcome`](crate::Wheel::add_outcome) and are read-only from
/// the outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bin {
    outcomes: HashSet<Outcome>,
}

impl Bin {
    /// Creates an empty bin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an outcome, returning `false` if one with the same name was
    /// already present.
    pub(crate) fn insert(&mut self, outcome: Outcome) -> bool {
        self.outcomes.insert(outcome)
    }

    /// Returns whether the bin pays `outcome`.
    #[must_use]
    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    /// Returns whether the bin pays the outcome called `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.outcomes.contains(name)
    }

    /// Returns the outcome called `name`, if the bin pays it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.get(name)
    }

    /// Returns the number of outcomes in the bin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether the bin is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates over the outcomes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a Outcome;
    type IntoIter = <&'a HashSet<Outcome> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
