//! Shared fixture constructors for the test modules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{DayClass, Ordinal, RecurrenceRule};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub(crate) fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_time(time(hour, minute))
}

/// An enabled monthly rule starting 2023-01-01 with no end date, firing at
/// 02:00. Tests override fields with struct update syntax.
pub(crate) fn rule(day_class: DayClass, ordinal: Ordinal) -> RecurrenceRule {
    RecurrenceRule {
        name: "test schedule".to_owned(),
        enabled: true,
        start: dt(2023, 1, 1, 0, 0),
        end: None,
        step_months: 1,
        day_class,
        ordinal,
        time_of_day: time(2, 0),
    }
}
