//! Day of the week by the Doomsday algorithm, with a step-by-step explanation.
//!
//! Every year, the dates 1/3, 2/28, 3/14, 4/4, 5/9, 6/6, 7/11, 8/8, 9/5,
//! 10/10, 11/7 and 12/12 (the "doomsdays") fall on the same weekday. The
//! calculator finds that weekday from the century anchor and the year's drift
//! within the century, then counts from the nearest doomsday to the requested
//! date. Each intermediate value is recorded as an [`ExplanationStep`].
//!
//! # Quick start
//!
//! ```
//! use doomsday_calculator::compute;
//! use doomsday_calendar::{CalendarDate, Weekday};
//!
//! let date: CalendarDate = "1776-07-04".parse().unwrap();
//! let (weekday, steps) = compute(date).into_parts();
//! assert_eq!(weekday, Weekday::Thursday);
//! assert_eq!(steps.last().unwrap().as_str(), "1776-07-04 falls on a Thursday.");
//! ```
//!
//! # Architecture
//!
//! ```text
//! compute_with_config()
//!   ├─ century_anchor()          (anchor.rs)
//!   ├─ find_closest_smaller()    (anchor.rs, over KEY_YEARS)
//!   ├─ true_mod()                (anchor.rs)
//!   ├─ month_anchor()            (anchor.rs, ANCHOR_TABLE + LeapRule)
//!   └─ DoomsdayResult            (result.rs)
//! ```
//!
//! [`compute`] uses [`LeapRule::Simplified`](doomsday_calendar::LeapRule),
//! which treats every fourth year as a leap year, century years included.
//! Pass a [`DoomsdayConfig`] with `LeapRule::Gregorian` to
//! [`compute_with_config`] for correct results in 1900, 2100 and the like.

pub mod anchor;
pub mod config;
pub mod doomsday;
pub mod result;

pub use anchor::{
    ANCHOR_TABLE, KEY_YEARS, century_anchor, find_closest_smaller, month_anchor, true_mod,
};
pub use config::DoomsdayConfig;
pub use doomsday::{compute, compute_with_config};
pub use result::{DoomsdayResult, ExplanationStep};
