/// Months in a Gregorian year, used for linear month-index arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;

/// Days in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// First day number of any month
pub const MIN_DAY: u32 = 1;

/// Every weekday occurs at least this many times in any month
/// (28 days is four full weeks), so ordinals First..Fourth always resolve.
pub(crate) const MIN_WEEKDAY_HITS: u32 = 4;

/// Even a 28-day February holds four Saturdays and four Sundays,
/// so the fourth weekend day always exists.
pub(crate) const MIN_WEEKEND_HITS: usize = 8;
