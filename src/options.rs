//! Wheel configuration options.

/// How a wheel treats an outcome re-added under a registered name with
/// different odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OddsPolicy {
    /// Reject the outcome with [`WheelError::OddsMismatch`](crate::WheelError::OddsMismatch).
    #[default]
    Strict,
    /// Keep the first registered outcome and log a warning.
    Lenient,
}

/// Configuration options for a roulette wheel.
///
/// ```
/// use roulette::{OddsPolicy, WheelOptions};
///
/// let options = WheelOptions::default().with_odds_policy(OddsPolicy::Lenient);
/// assert_eq!(options.odds_policy, OddsPolicy::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelOptions {
    /// Handling of odds divergence between outcomes sharing a name.
    pub odds_policy: OddsPolicy,
}

impl WheelOptions {
    /// Sets the odds policy.
    #[must_use]
    pub const fn with_odds_policy(mut self, policy: OddsPolicy) -> Self {
        self.odds_policy = policy;
        self
    }
}
