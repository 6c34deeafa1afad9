//! Computes concrete future occurrence date-times for monthly recurrence
//! rules such as "the first Monday of every second month" or "the last
//! calendar day of every month".
//!
//! The crate is a pure calculation library: given a [`RecurrenceRule`] and a
//! reference date-time, [`RecurrenceRule::resolve`] produces a bounded,
//! ordered sequence of [`Occurrence`] results, each either a concrete
//! date-time or a typed business failure. Nothing is scheduled, persisted,
//! or triggered here; callers own all of that.
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use recur_date::{DayClass, Mode, Ordinal, RecurrenceRule};
//!
//! let rule = RecurrenceRule {
//!     name: "monthly report".to_owned(),
//!     enabled: true,
//!     start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
//!     end: None,
//!     step_months: 1,
//!     day_class: DayClass::CalendarDay,
//!     ordinal: Ordinal::First,
//!     time_of_day: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
//! };
//!
//! let reference = NaiveDate::from_ymd_opt(2023, 7, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let upcoming = rule.resolve(Mode::Period, reference, 2);
//!
//! assert_eq!(
//!     upcoming[0],
//!     Ok(NaiveDate::from_ymd_opt(2023, 8, 1).unwrap().and_hms_opt(2, 0, 0).unwrap())
//! );
//! assert_eq!(
//!     upcoming[1],
//!     Ok(NaiveDate::from_ymd_opt(2023, 9, 1).unwrap().and_hms_opt(2, 0, 0).unwrap())
//! );
//! ```

mod consts;
mod prelude;
mod resolve;
mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use consts::{DAYS_PER_WEEK, MIN_DAY, MONTHS_PER_YEAR};
pub use resolve::{Occurrence, ResolveError};
pub use types::{DayClass, Mode, Ordinal};

use crate::prelude::*;
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Error parsing one of the string-typed enums.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unknown day class: {_0}")]
    UnknownDayClass(String),
    #[display(fmt = "Unknown ordinal: {_0}")]
    UnknownOrdinal(String),
    #[display(fmt = "Unknown mode: {_0}")]
    UnknownMode(String),
}

impl std::error::Error for ParseError {}

/// A monthly recurrence rule: which day of the month a schedule fires on,
/// how many months apart, at what time of day, and within which validity
/// window.
///
/// The rule is plain immutable data. All consistency checks (enablement,
/// positive step, window ordering) are business rules evaluated by
/// [`Self::resolve`] rather than construction-time invariants, so invalid
/// rules can be represented, stored, and reported on without panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    /// Human-readable label; never consulted by the resolution logic.
    pub name: String,
    /// Disabled rules resolve every occurrence to a cancellation failure.
    pub enabled: bool,
    /// Start of the validity window. Only the date portion participates in
    /// window comparisons; in anchor mode its month also fixes the grid all
    /// occurrences are measured from.
    pub start: NaiveDateTime,
    /// Optional end of the validity window, date-truncated for comparisons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    /// Months between occurrences; must be positive to resolve.
    pub step_months: i32,
    /// The category of day matched within each month.
    pub day_class: DayClass,
    /// Which occurrence of the day class is selected within the month.
    pub ordinal: Ordinal,
    /// Wall-clock time stamped onto every generated occurrence.
    pub time_of_day: NaiveTime,
}
