//! Validated proleptic Gregorian date.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::leap::days_in_month;

/// A validated `(year, month, day)` triple on the proleptic Gregorian calendar.
///
/// Month and day are range-checked at construction, including February 29
/// in non-leap years, so every `CalendarDate` names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` does not exist in that
    /// month of that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }
}

/// Parses `YYYY-MM-DD`.
///
/// The year may carry a leading `-` and any number of digits; month and day
/// take one or two digits each. Surrounding whitespace is ignored.
impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        let invalid_format = || CalendarError::InvalidFormat {
            raw: raw.to_string(),
        };

        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let mut parts = unsigned.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid_format());
        };
        if !is_digits(y, 1, 9) || !is_digits(m, 1, 2) || !is_digits(d, 1, 2) {
            return Err(invalid_format());
        }

        // Digit counts above keep every parse in range.
        let year: i32 = y.parse().map_err(|_| invalid_format())?;
        let year = if negative { -year } else { year };
        let month: u8 = m.parse().map_err(|_| invalid_format())?;
        let day: u8 = d.parse().map_err(|_| invalid_format())?;

        Self::new(year, month, day).map_err(|source| CalendarError::InvalidDate {
            raw: raw.to_string(),
            source: Box::new(source),
        })
    }
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Formats as `YYYY-MM-DD`, zero-padding the year to four digits.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}
