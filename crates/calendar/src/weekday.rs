//! Named days of the week.

use std::fmt;

use serde::Serialize;

/// Day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    /// Index 0.
    Sunday = 0,
    /// Index 1.
    Monday = 1,
    /// Index 2.
    Tuesday = 2,
    /// Index 3.
    Wednesday = 3,
    /// Index 4.
    Thursday = 4,
    /// Index 5.
    Friday = 5,
    /// Index 6.
    Saturday = 6,
}

impl Weekday {
    /// All seven days in index order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the day for any integer, reducing it modulo 7 first.
    ///
    /// Negative values wrap backwards: `-1` is Saturday.
    pub fn from_offset(offset: i64) -> Self {
        Self::ALL[offset.rem_euclid(7) as usize]
    }

    /// Returns the index of this day (Sunday = 0, ..., Saturday = 6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this day.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_in_index_order() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.index()), i);
            assert_eq!(Weekday::from_offset(i as i64), *day);
        }
    }

    #[test]
    fn sunday_is_zero() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
    }

    #[test]
    fn from_offset_wraps() {
        assert_eq!(Weekday::from_offset(0), Weekday::Sunday);
        assert_eq!(Weekday::from_offset(7), Weekday::Sunday);
        assert_eq!(Weekday::from_offset(13), Weekday::Saturday);
        assert_eq!(Weekday::from_offset(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_offset(-8), Weekday::Saturday);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(format!("{}", Weekday::Sunday), "Sunday");
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, "\"Thursday\"");
    }
}
