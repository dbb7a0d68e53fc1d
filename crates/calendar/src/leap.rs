//! Leap-year rules and month lengths.

use serde::Serialize;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Which leap-year test to apply.
///
/// `Simplified` treats every year divisible by 4 as a leap year and ignores
/// the century exception, so 1900 and 2100 count as leap years.
/// `Gregorian` applies the full proleptic Gregorian rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapRule {
    /// `year % 4 == 0`.
    #[default]
    Simplified,
    /// `year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)`.
    Gregorian,
}

impl LeapRule {
    /// Returns `true` if `year` is a leap year under this rule.
    ///
    /// Negative years follow the proleptic calendar (year 0 is a leap year,
    /// as are -4, -400, ...).
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            LeapRule::Simplified => year.rem_euclid(4) == 0,
            LeapRule::Gregorian => is_leap_year(year),
        }
    }

    /// Lowercase name used in configuration files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            LeapRule::Simplified => "simplified",
            LeapRule::Gregorian => "gregorian",
        }
    }
}

/// Proleptic Gregorian leap-year test.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in `month` of `year` on the proleptic Gregorian calendar.
///
/// Returns `None` if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(DAYS_PER_MONTH[month as usize])
}
