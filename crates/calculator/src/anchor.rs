//! Anchor tables and the modular arithmetic behind them.

use doomsday_calendar::{LeapRule, Weekday};

/// Doomsday date-of-month for each month of a common year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
///
/// All twelve dates fall on the same weekday within any given year.
pub const ANCHOR_TABLE: [u8; 13] = [0, 3, 28, 14, 4, 9, 6, 11, 8, 5, 10, 7, 12];

/// Offsets within a century whose anchor day equals the century anchor day.
///
/// Ascending. 28 years is 28 + 7 = 35 days of drift, a whole number of weeks.
pub const KEY_YEARS: [i64; 4] = [0, 28, 56, 84];

/// Mathematical modulo: the result is always in `0..modulus`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn true_mod(value: i64, modulus: i64) -> i64 {
    ((value % modulus) + modulus) % modulus
}

/// Anchor weekday of a century, where `century = floor(year / 100)`.
///
/// Periodic with period 4: Tuesday, Sunday, Friday, Wednesday for
/// `century mod 4` = 0, 1, 2, 3.
pub fn century_anchor(century: i64) -> Weekday {
    let c = true_mod(century, 4);
    Weekday::from_offset(true_mod(5 * c, 7) + 2)
}

/// Returns the first value at or below `target`, scanning `values` from the
/// back.
///
/// For an ascending slice this is the largest value `<= target`. Returns
/// `None` if every value exceeds `target`.
pub fn find_closest_smaller(values: &[i64], target: i64) -> Option<i64> {
    values.iter().rev().copied().find(|&v| v <= target)
}

/// Doomsday date-of-month for `month` in `year`.
///
/// January and February move one day later in leap years under `rule`.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12.
pub fn month_anchor(year: i32, month: u8, rule: LeapRule) -> u8 {
    let anchor = ANCHOR_TABLE[month as usize];
    if month <= 2 && rule.is_leap_year(year) {
        anchor + 1
    } else {
        anchor
    }
}
