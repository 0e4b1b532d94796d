//! Conversion between solar (Gregorian) dates and [`LunarDate`].
//!
//! The table anchors lunar 1901-01-01 to solar 1901-02-19; a solar date is
//! located by its whole-day offset from that epoch, walking the table year
//! by year and then month by month. A leap month is tried immediately after
//! the regular month sharing its ordinal, never before.

use chrono::{Duration, NaiveDate};

use crate::consts::{BOUND_SOLAR, EPOCH_SOLAR, MIN_YEAR};
use crate::table::{leap_month, month_days, year_days};
use crate::{LunarDate, ParseError};

/// Error type for solar/lunar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Solar date before the table epoch or past its end.
    #[error("Solar date {0} is outside the supported range 1901-02-19..2101-01-29")]
    SolarOutOfRange(NaiveDate),

    /// Error parsing or validating the lunar date.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Solar date of lunar 1901-01-01.
fn epoch() -> NaiveDate {
    let (y, m, d) = EPOCH_SOLAR;
    NaiveDate::from_ymd_opt(y, m, d).expect("epoch is a valid date")
}

/// First solar date past the table, the day after lunar 2100-12-29.
fn upper_bound() -> NaiveDate {
    let (y, m, d) = BOUND_SOLAR;
    NaiveDate::from_ymd_opt(y, m, d).expect("upper bound is a valid date")
}

impl LunarDate {
    /// Converts a solar date to its lunar equivalent. Time of day plays no
    /// part; the conversion is a pure function of the civil date.
    ///
    /// # Errors
    /// Returns `ConvertError::SolarOutOfRange` if `date` is before 1901-02-19
    /// or on/after 2101-01-29.
    pub fn from_solar(date: NaiveDate) -> Result<Self, ConvertError> {
        let epoch = epoch();
        if date < epoch || date >= upper_bound() {
            return Err(ConvertError::SolarOutOfRange(date));
        }
        let mut days = date.signed_duration_since(epoch).num_days();

        // Locate the lunar year; the bound check above guarantees the walk
        // ends inside the table
        let mut year = MIN_YEAR;
        loop {
            let len = i64::from(year_days(year));
            if days < len {
                break;
            }
            days -= len;
            year += 1;
        }

        // Locate the month; the leap month follows the regular month with
        // the same ordinal
        let leap = leap_month(year);
        let mut month = 1u8;
        let mut is_leap = false;
        loop {
            let len = i64::from(month_days(year, month, false));
            if days < len {
                break;
            }
            days -= len;
            if month == leap {
                let len = i64::from(month_days(year, month, true));
                if days < len {
                    is_leap = true;
                    break;
                }
                days -= len;
            }
            month += 1;
        }

        let day = days as u8 + 1;
        Self::from_parts(year, month, is_leap, day).map_err(Into::into)
    }

    /// Converts back to the solar date of this lunar day. Infallible: every
    /// constructible `LunarDate` lies within the table, and the table spans
    /// exactly the solar range 1901-02-19..2101-01-29.
    pub fn to_solar(&self) -> NaiveDate {
        let (year, month, leap, day) = self.to_parts();

        let mut days: i64 = (MIN_YEAR..year).map(|y| i64::from(year_days(y))).sum();

        let leap_index = leap_month(year);
        for m in 1..month {
            days += i64::from(month_days(year, m, false));
            if m == leap_index {
                days += i64::from(month_days(year, m, true));
            }
        }
        // The leap month starts after the regular month it shares its
        // ordinal with
        if leap {
            days += i64::from(month_days(year, month, false));
        }
        days += i64::from(day) - 1;

        epoch() + Duration::days(days)
    }
}

/// Converts a solar date to the canonical lunar string, e.g.
/// `1992年八月初六` or `2033年闰冬月廿八`.
///
/// # Errors
/// Returns `ConvertError::SolarOutOfRange` if `date` is outside
/// 1901-02-19..2101-01-29.
pub fn solar_to_lunar(date: NaiveDate) -> Result<String, ConvertError> {
    Ok(LunarDate::from_solar(date)?.to_string())
}

/// Parses a canonical lunar string and converts it to its solar date.
///
/// # Errors
/// Returns `ConvertError::Parse` if the text does not match the format or
/// names a day that does not exist in the table.
pub fn lunar_to_solar(text: &str) -> Result<NaiveDate, ConvertError> {
    let date: LunarDate = text.parse().map_err(ConvertError::from)?;
    Ok(date.to_solar())
}
