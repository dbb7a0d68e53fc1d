//! The Doomsday algorithm with its explanation trace.

use doomsday_calendar::{CalendarDate, Weekday};
use tracing::debug;

use crate::anchor::{KEY_YEARS, century_anchor, find_closest_smaller, month_anchor, true_mod};
use crate::config::DoomsdayConfig;
use crate::result::{DoomsdayResult, ExplanationStep};

const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Computes the day of the week for `date` with the default configuration.
///
/// Equivalent to [`compute_with_config`] with [`DoomsdayConfig::default()`].
pub fn compute(date: CalendarDate) -> DoomsdayResult {
    compute_with_config(date, &DoomsdayConfig::default())
}

/// Computes the day of the week for `date`, recording each step.
///
/// # Algorithm
///
/// 1. Century anchor from `floor(year / 100) mod 4`.
/// 2. Closest key year (0, 28, 56, 84) at or below the last two digits.
/// 3. Years since the key year plus the leap years among them.
/// 4. That drift reduced modulo 7 (narrated only when it is at least 7).
/// 5. Year anchor = century anchor + drift.
/// 6. Month doomsday, moved one day later for January/February of a leap year.
/// 7. Offset from the month doomsday to the requested day.
/// 8. That offset reduced modulo 7 (narrated only when it is at least 7 either way).
/// 9. Final weekday.
///
/// Every call builds its own step list; nothing is shared between calls.
#[tracing::instrument(skip_all, fields(date = %date, leap_rule = config.leap_rule().name()))]
pub fn compute_with_config(date: CalendarDate, config: &DoomsdayConfig) -> DoomsdayResult {
    let year = date.year();
    let (month, day) = date.month_day();
    let month_name = MONTH_NAMES[month as usize];
    let mut steps = Vec::with_capacity(9);

    // 1. Century anchor
    let century = i64::from(year).div_euclid(100);
    let anchor = century_anchor(century);
    debug!(century, anchor = %anchor, "century anchor");
    steps.push(ExplanationStep::new(format!(
        "The year {year} is in the century starting at {}, whose anchor day is {anchor}.",
        century * 100
    )));

    // 2. Closest key year
    let yy = i64::from(year).rem_euclid(100);
    let key_year = find_closest_smaller(&KEY_YEARS, yy).unwrap_or(KEY_YEARS[0]);
    debug!(yy, key_year, "key year");
    steps.push(ExplanationStep::new(format!(
        "The closest key year at or below {yy} is {key_year}, which shares the century anchor day."
    )));

    // 3. Drift since the key year
    let base_days = yy - key_year;
    let leap_days = base_days / 4;
    let total_days = base_days + leap_days;
    steps.push(ExplanationStep::new(format!(
        "{base_days} years have passed since the key year ({yy} - {key_year}), with {leap_days} \
         leap years among them, for a total of {base_days} + {leap_days} = {total_days} days."
    )));

    // 4. Drop whole weeks
    let actual_days = true_mod(total_days, 7);
    if total_days >= 7 {
        steps.push(ExplanationStep::new(format!(
            "Dropping whole weeks, {total_days} days is the same as {actual_days} days \
             ({total_days} mod 7 = {actual_days})."
        )));
    }

    // 5. Year anchor
    let year_anchor = Weekday::from_offset(i64::from(anchor.index()) + actual_days);
    debug!(total_days, actual_days, year_anchor = %year_anchor, "year anchor");
    steps.push(ExplanationStep::new(format!(
        "Counting {actual_days} days forward from {anchor} gives {year_anchor}, \
         the anchor day for {year}."
    )));

    // 6. Month doomsday
    let anchor_date = month_anchor(year, month, config.leap_rule());
    if month <= 2 && config.leap_rule().is_leap_year(year) {
        steps.push(ExplanationStep::new(format!(
            "{year} is a leap year, so the {month_name} doomsday moves one day later, \
             from {} to {anchor_date}.",
            anchor_date - 1
        )));
    }
    steps.push(ExplanationStep::new(format!(
        "The {month_name} doomsday is {anchor_date} ({month}/{anchor_date}), \
         which falls on {year_anchor}."
    )));

    // 7. Offset to the requested day
    let diff = i64::from(day) - i64::from(anchor_date);
    let result_day = i64::from(year_anchor.index()) + diff;
    debug!(anchor_date, diff, result_day, "offset from doomsday");
    steps.push(ExplanationStep::new(format!(
        "{month}/{day} is {diff:+} days from {month}/{anchor_date}, \
         so the answer is {year_anchor} {diff:+} days."
    )));

    // 8. Drop whole weeks from the offset
    if diff >= 7 || diff <= -7 {
        steps.push(ExplanationStep::new(format!(
            "Dropping whole weeks, {diff:+} days is the same as +{} days.",
            true_mod(diff, 7)
        )));
    }

    // 9. Final weekday
    let weekday = Weekday::from_offset(true_mod(result_day, 7));
    debug!(weekday = %weekday, n_steps = steps.len(), "computed");
    steps.push(ExplanationStep::new(format!("{date} falls on a {weekday}.")));

    DoomsdayResult::new(weekday, steps)
}
