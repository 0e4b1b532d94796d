/// First year covered by the lunar table (inclusive)
pub const MIN_YEAR: u16 = 1901;

/// Last year covered by the lunar table (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Maximum valid lunar month
pub const MAX_MONTH: u8 = 12;

/// First day of a lunar month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// A lunar month never has more than 30 days
pub const MAX_DAY: u8 = 30;

/// Solar date of lunar 1901-01-01, day offset zero of the table
pub const EPOCH_SOLAR: (i32, u32, u32) = (1901, 2, 19);

/// Exclusive solar upper bound; the day after lunar 2100-12-29
pub const BOUND_SOLAR: (i32, u32, u32) = (2101, 1, 29);

/// Lunar month names, index 0 is the first month (正月)
pub const MONTH_NAMES: [char; 12] = [
    '正', '二', '三', '四', '五', '六', '七', '八', '九', '十', '冬', '腊',
];

/// Ones-digit day names, index 0 is day 1 (一)
pub const DAY_ONES: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Tens prefixes for day names, indexed by `day / 10`
pub const DAY_TENS: [char; 3] = ['初', '十', '廿'];

/// Day 10 does not follow the tens-prefix scheme
pub const DAY_TEN: &str = "初十";
/// Day 20
pub const DAY_TWENTY: &str = "二十";
/// Day 30
pub const DAY_THIRTY: &str = "三十";

/// Separator after the year digits
pub const YEAR_MARKER: char = '年';
/// Separator after the month name
pub const MONTH_MARKER: char = '月';
/// Prefix marking a leap month
pub const LEAP_MARKER: char = '闰';
