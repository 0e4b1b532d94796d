use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::table;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A lunar year guaranteed to be in the range covered by the table
/// (`MIN_YEAR..=MAX_YEAR`, 1901..=2100).
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within the table range
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the index (1-12) of this year's leap month, or `None` if the
    /// year has no leap month.
    pub fn leap_month(self) -> Option<Month> {
        Month::new(table::leap_month(self.get())).ok()
    }

    /// Returns the total number of days in this lunar year.
    pub const fn days(self) -> u16 {
        table::year_days(self.get())
    }

    /// Returns the number of days (29 or 30) in the given month of this
    /// lunar year.
    ///
    /// # Errors
    /// Returns `ParseError::NotLeapMonth` if `leap` is set but `month` is
    /// not this year's leap month.
    pub fn month_days(self, month: Month, leap: bool) -> Result<u8, ParseError> {
        if leap && table::leap_month(self.get()) != month.get() {
            return Err(ParseError::NotLeapMonth {
                year: self.get(),
                month: month.get(),
            });
        }
        Ok(table::month_days(self.get(), month.get(), leap))
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lunar month ordinal guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Whether the month is a leap month is tracked separately, since a leap
/// month shares its ordinal with the regular month it follows.
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month guaranteed to be valid for a given lunar year and month
/// (29 or 30 days depending on the table entry).
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the actual length of the
    /// given lunar month.
    ///
    /// # Errors
    /// Returns `ParseError::NotLeapMonth` if `leap` is set but `month` is not
    /// the leap month of `year`, and `ParseError::InvalidDay` if the value is
    /// 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month, leap: bool) -> Result<Self, ParseError> {
        let max_day = year.month_days(month, leap)?;
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            leap,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid.clone())?;

        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only check the
        // universal 1..=30 bounds
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(ParseError::DayOutOfBounds(value));
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::DayOutOfBounds(value))?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
