//! # doomsday-calendar
//!
//! Date model for the Doomsday calculator on the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str (YYYY-MM-DD)"] -->|"str::parse()"| B["CalendarDate"]
//!     C["(year, month, day)"] -->|"CalendarDate::new()"| B
//!     B -->|".year() / .month() / .day()"| D["calculator"]
//!     D --> E["Weekday"]
//!     F["LeapRule"] -->|".is_leap_year()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use doomsday_calendar::{CalendarDate, CalendarError, LeapRule, Weekday};
//!
//! let date: CalendarDate = "2024-12-25".parse().unwrap();
//! assert_eq!(date.month_day(), (12, 25));
//!
//! assert_eq!("".parse::<CalendarDate>().unwrap_err(), CalendarError::EmptyInput);
//! assert!("2023-02-29".parse::<CalendarDate>().is_err());
//!
//! assert!(LeapRule::Simplified.is_leap_year(1900));
//! assert!(!LeapRule::Gregorian.is_leap_year(1900));
//!
//! assert_eq!(Weekday::from_offset(-1), Weekday::Saturday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated date and `YYYY-MM-DD` parsing |
//! | `weekday` | Named days of the week |
//! | `leap` | Leap-year rules and month lengths |
//! | `error` | Error types |

mod date;
mod error;
mod leap;
mod weekday;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use leap::{LeapRule, days_in_month, is_leap_year};
pub use weekday::Weekday;
