//! Error types for the doomsday-calendar crate.

/// Error type for all fallible operations in the doomsday-calendar crate.
///
/// Every way a date can be rejected lives here, so that the calculator
/// downstream only ever sees a structurally valid [`CalendarDate`].
///
/// [`CalendarDate`]: crate::CalendarDate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the date string is empty or only whitespace.
    #[error("please input a date before submitting")]
    EmptyInput,

    /// Returned when the date string is not of the form `YYYY-MM-DD`.
    #[error("date input is invalid, please retry entering the date: {raw:?} (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The raw input that failed to parse.
        raw: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The year the day was checked against.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a well-formed `YYYY-MM-DD` string names a date that
    /// does not exist on the calendar.
    #[error("date input is invalid, please retry entering the date: {raw:?}")]
    InvalidDate {
        /// The raw input that was rejected.
        raw: String,
        /// The range check that failed.
        #[source]
        source: Box<CalendarError>,
    },
}
