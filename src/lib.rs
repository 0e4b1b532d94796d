mod consts;
mod convert;
mod prelude;
mod table;
mod types;

pub use consts::*;
pub use convert::{lunar_to_solar, solar_to_lunar, ConvertError};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A date in the traditional Chinese lunisolar calendar, within the table
/// range 1901..=2100. A value of this type always names a real calendar day:
/// the leap flag matches the year's encoding and the day never exceeds the
/// month's actual length, so converting back to a solar date cannot fail.
///
/// The canonical text form is `<year>年[闰]<month>月<day>`, e.g.
/// `1992年八月初六` or `2033年闰冬月廿八`; `Display` produces it and
/// `FromStr` accepts exactly it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: Year,
    month: Month,
    leap: bool,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid lunar date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid lunar year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid lunar month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month} of lunar year {year}")]
    InvalidDay {
        year: u16,
        month: u8,
        leap: bool,
        day: u8,
    },
    #[display(fmt = "Invalid lunar day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    DayOutOfBounds(u8),
    #[display(fmt = "Lunar year {year} has no leap month {month}")]
    NotLeapMonth { year: u16, month: u8 },
    #[display(fmt = "Empty lunar date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl LunarDate {
    /// Creates a new lunar date from already-typed components, re-checking
    /// the cross-field invariants (leap flag and day-of-month length).
    ///
    /// # Errors
    /// Returns `ParseError::NotLeapMonth` or `ParseError::InvalidDay` if the
    /// components don't name a real calendar day.
    pub fn new(year: Year, month: Month, leap: bool, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month, leap)?;
        Ok(Self {
            year,
            month,
            leap,
            day,
        })
    }

    /// Creates a lunar date from raw components, validating year range,
    /// month range, leap-month consistency, and day range, in that order.
    ///
    /// # Errors
    /// Returns the `ParseError` variant for the first failed check.
    pub fn from_parts(year: u16, month: u8, leap: bool, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month, leap)?;
        Ok(Self {
            year,
            month,
            leap,
            day,
        })
    }

    /// Decomposes into raw components: (year, month, leap, day)
    pub const fn to_parts(&self) -> (u16, u8, bool, u8) {
        (
            self.year.get(),
            self.month.get(),
            self.leap,
            self.day.get(),
        )
    }

    /// Returns the lunar year (as u16 for convenience)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the lunar month ordinal 1-12 (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns true if this date falls in a leap month
    pub const fn is_leap(&self) -> bool {
        self.leap
    }

    /// Returns the day of the lunar month (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Key for chronological ordering. A leap month shares its ordinal with
    /// the regular month it follows, so `leap` breaks the tie after `month`.
    #[inline]
    const fn sort_key(&self) -> (u16, u8, bool, u8) {
        self.to_parts()
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.year, YEAR_MARKER)?;
        if self.leap {
            write!(f, "{LEAP_MARKER}")?;
        }
        write!(
            f,
            "{}{}",
            MONTH_NAMES[(self.month.get() - 1) as usize],
            MONTH_MARKER
        )?;
        match self.day.get() {
            10 => f.write_str(DAY_TEN),
            20 => f.write_str(DAY_TWENTY),
            30 => f.write_str(DAY_THIRTY),
            day => write!(
                f,
                "{}{}",
                DAY_TENS[(day / 10) as usize],
                DAY_ONES[(day % 10 - 1) as usize]
            ),
        }
    }
}

/// Decodes a day name: the three fixed names 初十/二十/三十, or a tens
/// prefix (初/十/廿 for 0/10/20) followed by a ones digit (一..九).
fn parse_day_name(s: &str) -> Option<u8> {
    match s {
        DAY_TEN => return Some(10),
        DAY_TWENTY => return Some(20),
        DAY_THIRTY => return Some(30),
        _ => {}
    }
    let mut chars = s.chars();
    let tens = chars.next()?;
    let ones = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let tens = DAY_TENS.iter().position(|&c| c == tens)?;
    let ones = DAY_ONES.iter().position(|&c| c == ones)?;
    Some(tens as u8 * 10 + ones as u8 + 1)
}

impl FromStr for LunarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let bad_format = || ParseError::InvalidFormat(trimmed.to_owned());

        let (year_part, rest) = trimmed.split_once(YEAR_MARKER).ok_or_else(bad_format)?;
        // The year is exactly four ASCII digits; the table range check comes later
        if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad_format());
        }
        let year: u16 = year_part.parse().map_err(|_| bad_format())?;

        let (leap, rest) = match rest.strip_prefix(LEAP_MARKER) {
            Some(stripped) => (true, stripped),
            None => (false, rest),
        };

        let (month_part, day_part) = rest.split_once(MONTH_MARKER).ok_or_else(bad_format)?;
        let mut month_chars = month_part.chars();
        let month_char = month_chars.next().ok_or_else(bad_format)?;
        if month_chars.next().is_some() {
            return Err(bad_format());
        }
        let month = MONTH_NAMES
            .iter()
            .position(|&c| c == month_char)
            .ok_or_else(bad_format)?;

        let day = parse_day_name(day_part).ok_or_else(bad_format)?;

        Self::from_parts(year, month as u8 + 1, leap, day)
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl TryFrom<(u16, u8, bool, u8)> for LunarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, bool, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2, value.3)
    }
}

impl serde::Serialize for LunarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LunarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = "1992年八月初六".parse::<LunarDate>().unwrap();
        assert_eq!(date.to_parts(), (1992, 8, false, 6));
        assert_eq!(date.year(), 1992);
        assert_eq!(date.month(), 8);
        assert!(!date.is_leap());
        assert_eq!(date.day(), 6);
    }

    #[test]
    fn test_parse_leap_date() {
        let date = "2033年闰冬月廿八".parse::<LunarDate>().unwrap();
        assert_eq!(date.to_parts(), (2033, 11, true, 28));
        assert!(date.is_leap());
    }

    #[test]
    fn test_parse_first_month_name() {
        let date = "2024年正月初一".parse::<LunarDate>().unwrap();
        assert_eq!(date.to_parts(), (2024, 1, false, 1));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 1992年八月初六 ".parse::<LunarDate>().unwrap();
        assert_eq!(date.to_parts(), (1992, 8, false, 6));
    }

    #[test]
    fn test_parse_malformed() {
        for text in [
            "not-a-date",
            "1992八月初六",       // missing 年
            "1992年八初六",       // missing 月
            "92年八月初六",       // two-digit year
            "一九九二年八月初六", // non-ASCII year digits
            "1992年猫月初六",     // unknown month name
            "1992年八月初",       // truncated day name
            "1992年八月初六六",   // trailing garbage
            "1992年闰闰八月初六", // doubled leap marker
        ] {
            let result = text.parse::<LunarDate>();
            assert!(
                matches!(result, Err(ParseError::InvalidFormat(_))),
                "{text:?} should be a format error, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            "".parse::<LunarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "   ".parse::<LunarDate>(),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_year_out_of_table() {
        assert!(matches!(
            "1900年正月初一".parse::<LunarDate>(),
            Err(ParseError::InvalidYear(1900))
        ));
        assert!(matches!(
            "2101年正月初一".parse::<LunarDate>(),
            Err(ParseError::InvalidYear(2101))
        ));
    }

    #[test]
    fn test_parse_leap_mismatch() {
        // 1992 has no leap month
        assert!(matches!(
            "1992年闰八月初六".parse::<LunarDate>(),
            Err(ParseError::NotLeapMonth {
                year: 1992,
                month: 8
            })
        ));
        // 2033's leap month is the 11th (冬), not the 8th
        assert!(matches!(
            "2033年闰八月初一".parse::<LunarDate>(),
            Err(ParseError::NotLeapMonth { .. })
        ));
    }

    #[test]
    fn test_parse_leap_month_accepted() {
        // 2033 does have a leap 冬月
        let date = "2033年闰冬月初一".parse::<LunarDate>().unwrap();
        assert_eq!(date.to_parts(), (2033, 11, true, 1));
    }

    #[test]
    fn test_parse_day_past_end_of_month() {
        // 1992-08 has only 29 days
        assert!(matches!(
            "1992年八月三十".parse::<LunarDate>(),
            Err(ParseError::InvalidDay {
                year: 1992,
                month: 8,
                leap: false,
                day: 30
            })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for text in [
            "1992年八月初六",
            "2033年闰冬月廿八",
            "1901年正月初一",
            "2100年腊月廿九",
            "2020年闰四月初十",
        ] {
            let date = text.parse::<LunarDate>().unwrap();
            assert_eq!(date.to_string(), text);
        }
    }

    #[test]
    fn test_display_day_names() {
        // 1992-02 is a 30-day month, so every day name shape occurs
        for (day, name) in [
            (1, "初一"),
            (2, "初二"),
            (9, "初九"),
            (10, "初十"),
            (11, "十一"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            let date = LunarDate::from_parts(1992, 2, false, day).unwrap();
            assert_eq!(date.to_string(), format!("1992年二月{name}"));
        }
    }

    #[test]
    fn test_display_month_names() {
        for (month, name) in [(1, '正'), (2, '二'), (10, '十'), (11, '冬'), (12, '腊')] {
            let date = LunarDate::from_parts(1992, month, false, 1).unwrap();
            assert_eq!(date.to_string(), format!("1992年{name}月初一"));
        }
    }

    #[test]
    fn test_new_revalidates() {
        let year = Year::new(2033).unwrap();
        let month = Month::new(11).unwrap();
        // Day 30 is valid for the regular 11th month (30 days)...
        let day = Day::new(30, year, month, false).unwrap();
        assert!(LunarDate::new(year, month, false, day).is_ok());
        // ...but not for the 29-day leap month
        assert!(matches!(
            LunarDate::new(year, month, true, day),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering_leap_month_follows_regular() {
        let regular = LunarDate::from_parts(2033, 11, false, 30).unwrap();
        let leap = LunarDate::from_parts(2033, 11, true, 1).unwrap();
        let next = LunarDate::from_parts(2033, 12, false, 1).unwrap();
        assert!(regular < leap);
        assert!(leap < next);
    }

    #[test]
    fn test_ordering_across_years() {
        let a = LunarDate::from_parts(1992, 12, false, 29).unwrap();
        let b = LunarDate::from_parts(1993, 1, false, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_try_from_tuple() {
        let date: LunarDate = (2033, 11, true, 28).try_into().unwrap();
        assert_eq!(date.to_string(), "2033年闰冬月廿八");

        let result: Result<LunarDate, _> = (2033, 13, false, 1).try_into();
        assert!(matches!(result, Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_serde_string_format() {
        let date = LunarDate::from_parts(1992, 8, false, 6).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1992年八月初六""#);

        let parsed: LunarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Leap flag inconsistent with the table
        let result: Result<LunarDate, _> = serde_json::from_str(r#""1992年闰八月初六""#);
        assert!(result.is_err());

        // Day past the end of the month
        let result: Result<LunarDate, _> = serde_json::from_str(r#""1992年八月三十""#);
        assert!(result.is_err());

        // Valid value round-trips
        let result: Result<LunarDate, _> = serde_json::from_str(r#""2020年闰四月初十""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = "1900年正月初一".parse::<LunarDate>().unwrap_err();
        assert!(err.to_string().contains("1901-2100"));

        let err = "1992年闰八月初六".parse::<LunarDate>().unwrap_err();
        assert!(err.to_string().contains("no leap month"));
    }
}
