//! Configuration for Doomsday calculations.

use doomsday_calendar::LeapRule;

/// Options for [`compute_with_config`](crate::compute_with_config).
///
/// # Example
///
/// ```
/// use doomsday_calculator::DoomsdayConfig;
/// use doomsday_calendar::LeapRule;
///
/// let config = DoomsdayConfig::new().with_leap_rule(LeapRule::Gregorian);
/// assert_eq!(config.leap_rule(), LeapRule::Gregorian);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoomsdayConfig {
    /// Leap-year test used for the January/February anchor adjustment.
    leap_rule: LeapRule,
}

impl DoomsdayConfig {
    /// Creates a configuration with the default [`LeapRule::Simplified`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leap-year rule.
    pub fn with_leap_rule(mut self, leap_rule: LeapRule) -> Self {
        self.leap_rule = leap_rule;
        self
    }

    /// Returns the leap-year rule.
    pub fn leap_rule(&self) -> LeapRule {
        self.leap_rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DoomsdayConfig::new().leap_rule(), LeapRule::Simplified);
        assert_eq!(DoomsdayConfig::default(), DoomsdayConfig::new());
    }

    #[test]
    fn test_builder() {
        let cfg = DoomsdayConfig::new().with_leap_rule(LeapRule::Gregorian);
        assert_eq!(cfg.leap_rule(), LeapRule::Gregorian);
    }
}
