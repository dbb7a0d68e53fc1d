//! Which optional steps appear depends only on the `>= 7` thresholds.

use doomsday_calculator::compute;
use doomsday_calendar::CalendarDate;

fn step_count(year: i32, month: u8, day: u8) -> usize {
    compute(CalendarDate::new(year, month, day).unwrap())
        .steps()
        .len()
}

#[test]
fn minimal_trace() {
    // 2001: drift 1 + 0 = 1, March 14 is the doomsday itself.
    assert_eq!(step_count(2001, 3, 14), 7);
}

#[test]
fn drift_reduction_step() {
    // 2005: drift 5 + 1 = 6, no reduction. 2006: drift 6 + 1 = 7, reduction.
    assert_eq!(step_count(2005, 3, 14), 7);
    assert_eq!(step_count(2006, 3, 14), 8);
}

#[test]
fn leap_adjustment_step() {
    // 2001 is common; 2004 is leap (drift 4 + 1 = 5, no reduction).
    assert_eq!(step_count(2001, 1, 3), 7);
    assert_eq!(step_count(2004, 1, 4), 8);
    // The adjustment never appears after February.
    assert_eq!(step_count(2004, 3, 14), 7);
}

#[test]
fn offset_reduction_step_thresholds() {
    // March doomsday is the 14th in 2001.
    assert_eq!(step_count(2001, 3, 20), 7); // +6
    assert_eq!(step_count(2001, 3, 21), 8); // +7
    assert_eq!(step_count(2001, 3, 8), 7); // -6
    assert_eq!(step_count(2001, 3, 7), 8); // -7
}

#[test]
fn reduction_narrated_even_when_it_changes_nothing() {
    let result = compute(CalendarDate::new(2001, 3, 28).unwrap());
    assert!(
        result
            .steps()
            .iter()
            .any(|s| s.as_str() == "Dropping whole weeks, +14 days is the same as +0 days.")
    );
}
