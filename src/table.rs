//! Packed per-year lunar calendar data for 1901-2100.
//!
//! Each year is one integer with 20 meaningful bits:
//! - bits 0-3: index (1-12) of the leap month, 0 if the year has none;
//! - bits 4-15: one bit per regular month, bit `16 - m` for month `m`,
//!   set means 30 days, clear means 29;
//! - bit 16: the leap month has 30 days if set, 29 if clear.

use crate::consts::{MAX_MONTH, MIN_YEAR};

/// Leap-month index, bits 0-3
const LEAP_MONTH_MASK: u32 = 0xf;
/// Regular-month length bits, bits 4-15
const MONTH_BITS_MASK: u32 = 0xfff0;
/// Leap-month length bit
const LEAP_DAYS_BIT: u32 = 0x10000;
/// All month-length bits including the leap bit
const ALL_DAYS_MASK: u32 = 0x1fff0;

/// Lunar data for 1901-2100, sourced from the Hong Kong Observatory
/// conversion table (http://data.weather.gov.hk/gts/time/conversion1_text_c.htm)
#[rustfmt::skip]
const LUNAR_INFO: [u32; 200] = [
    0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, 0x04ae0, // 1901-1910
    0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, 0x04970, // 1911-1920
    0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, 0x06566, // 1921-1930
    0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, 0x0d4a0, // 1931-1940
    0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, 0x06ca0, // 1941-1950
    0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, 0x0aea6, // 1951-1960
    0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, 0x096d0, // 1961-1970
    0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, 0x095b0, // 1971-1980
    0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, 0x04af5, // 1981-1990
    0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, 0x0c960, // 1991-2000
    0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, 0x0a950, // 2001-2010
    0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, 0x07954, // 2011-2020
    0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, 0x05aa0, // 2021-2030
    0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, 0x0b5a0, // 2031-2040
    0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, 0x14b63, // 2041-2050
    0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, 0x0a2e0, // 2051-2060
    0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, 0x052d0, // 2061-2070
    0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, 0x0b273, // 2071-2080
    0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, 0x0e968, // 2081-2090
    0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, 0x0d520, // 2091-2100
];

const fn info(year: u16) -> u32 {
    debug_assert!(MIN_YEAR <= year && year <= crate::consts::MAX_YEAR);
    LUNAR_INFO[(year - MIN_YEAR) as usize]
}

/// Returns the index (1-12) of the leap month in `year`, or 0 if the year
/// has no leap month.
pub const fn leap_month(year: u16) -> u8 {
    (info(year) & LEAP_MONTH_MASK) as u8
}

/// Returns the number of days (29 or 30) in the given lunar month.
///
/// With `leap == true` the result is meaningful only when `month` is the
/// leap month of `year`; callers validate that first.
pub const fn month_days(year: u16, month: u8, leap: bool) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    debug_assert!(!leap || leap_month(year) == month);
    let thirty = if leap {
        info(year) & LEAP_DAYS_BIT != 0
    } else {
        info(year) & (1 << (16 - month)) != 0
    };
    if thirty { 30 } else { 29 }
}

/// Returns the total number of days in lunar year `year` (353 to 385).
pub const fn year_days(year: u16) -> u16 {
    let info = info(year);
    if info & LEAP_MONTH_MASK == 0 {
        29 * 12 + (info & MONTH_BITS_MASK).count_ones() as u16
    } else {
        29 * 13 + (info & ALL_DAYS_MASK).count_ones() as u16
    }
}
