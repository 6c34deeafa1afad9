use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::RecurrenceRule;
use crate::consts::{DAYS_PER_WEEK, MIN_DAY, MIN_WEEKDAY_HITS, MIN_WEEKEND_HITS, MONTHS_PER_YEAR};
use crate::types::{DayClass, Mode, Ordinal};

/// One computed schedule slot: a concrete occurrence date-time, or the
/// business reason it could not be produced.
pub type Occurrence = Result<NaiveDateTime, ResolveError>;

/// Why an occurrence (or a whole series) could not be produced.
///
/// These are validation signals, not exceptional conditions; the resolver
/// never panics and always returns the full requested count of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ResolveError {
    /// The rule's `enabled` flag is off.
    #[error("Schedule was cancelled!")]
    Cancelled,

    /// The rule's `step_months` is zero or negative.
    #[error("Number of months can't be non positive!")]
    NonPositiveStep,

    /// The rule's validity window is inverted (start date after end date).
    #[error("Start date can't be later than end date")]
    StartAfterEnd,

    /// The reference date, or this occurrence's computed date, falls past
    /// the rule's end date.
    #[error("Current date is past end date!")]
    PastEndDate,
}

impl RecurrenceRule {
    /// Computes the next `count` occurrences of this rule after `reference`.
    ///
    /// Always returns exactly `count` elements, in chronological order of the
    /// months they were computed for. Configuration failures (disabled rule,
    /// non-positive step, inverted window, reference already past the end
    /// date) fill every slot with the same error; the end-date bound is
    /// otherwise re-checked per occurrence, so a series can start with
    /// successes and end with `PastEndDate` failures once the computed
    /// months walk past the window.
    ///
    /// `mode` selects how each non-initial occurrence derives its month:
    /// [`Mode::Period`] chains from the previous occurrence's month, while
    /// [`Mode::Anchor`] always measures from the rule's start month by a
    /// growing multiple of `step_months`. Both begin in the first eligible
    /// month strictly after the reference month.
    pub fn resolve(&self, mode: Mode, reference: NaiveDateTime, count: usize) -> Vec<Occurrence> {
        if let Err(error) = self.validate(reference.date()) {
            return vec![Err(error); count];
        }

        let step = i64::from(self.step_months);
        let mut cursor = match mode {
            Mode::Period => month_index(reference.date()),
            Mode::Anchor => {
                let anchor = month_index(self.start.date());
                // Number of whole steps from the anchor that still land at or
                // before the reference month; the loop below adds one more.
                let lead = (month_index(reference.date()) - anchor)
                    .div_euclid(step)
                    .max(0);
                anchor.saturating_add(step.saturating_mul(lead))
            }
        };

        let mut occurrences = Vec::with_capacity(count);
        for _ in 0..count {
            cursor = cursor.saturating_add(step);
            occurrences.push(self.occurrence_in(cursor));
        }
        occurrences
    }

    /// Rule-level checks applied once, before any occurrence is generated.
    /// First failure wins and is reported for every requested slot.
    fn validate(&self, reference: NaiveDate) -> Result<(), ResolveError> {
        if !self.enabled {
            return Err(ResolveError::Cancelled);
        }
        if self.step_months <= 0 {
            return Err(ResolveError::NonPositiveStep);
        }
        if let Some(end) = self.end {
            if self.start.date() > end.date() {
                return Err(ResolveError::StartAfterEnd);
            }
            if reference > end.date() {
                return Err(ResolveError::PastEndDate);
            }
        }
        Ok(())
    }

    /// Resolves this rule's day within the month at `index` and stamps the
    /// rule's time of day onto it, then checks the end-date bound.
    fn occurrence_in(&self, index: i64) -> Occurrence {
        // A month outside the representable calendar lies past any window.
        let Some(date) = resolve_day(index, self.day_class, self.ordinal) else {
            return Err(ResolveError::PastEndDate);
        };
        let candidate = date.and_time(self.time_of_day);
        if let Some(end) = self.end {
            // Only the end side is date-truncated; the candidate keeps its
            // time of day, so 02:00 on the end date already falls outside.
            if candidate > end.date().and_time(NaiveTime::MIN) {
                return Err(ResolveError::PastEndDate);
            }
        }
        Ok(candidate)
    }
}

/// Linear month index (year × 12 + zero-based month), the unit all month
/// stepping is done in.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * MONTHS_PER_YEAR + i64::from(date.month0())
}

fn split_month_index(index: i64) -> Option<(i32, u32)> {
    let year = i32::try_from(index.div_euclid(MONTHS_PER_YEAR)).ok()?;
    let month0 = u32::try_from(index.rem_euclid(MONTHS_PER_YEAR)).ok()?;
    Some((year, month0 + 1))
}

/// Maps (month, day class, ordinal) to a concrete date.
///
/// Total for every representable month: each weekday occurs at least four
/// times per month, weekends contribute at least eight candidate days, and
/// the shortest month still has 28 calendar days. `None` only means the
/// month index itself fell outside chrono's supported range.
fn resolve_day(index: i64, day_class: DayClass, ordinal: Ordinal) -> Option<NaiveDate> {
    let (year, month) = split_month_index(index)?;
    let day = match day_class {
        DayClass::CalendarDay => match ordinal.position() {
            Some(position) => position,
            None => days_in_month(year, month)?,
        },
        DayClass::Weekday(weekday) => nth_weekday(year, month, weekday, ordinal)?,
        DayClass::WeekendDay => nth_weekend_day(year, month, ordinal)?,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, MIN_DAY)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Day number of the k-th (or final) occurrence of `weekday` in the month.
fn nth_weekday(year: i32, month: u32, weekday: Weekday, ordinal: Ordinal) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, MIN_DAY)?;
    let offset = (weekday.num_days_from_monday() + DAYS_PER_WEEK
        - first.weekday().num_days_from_monday())
        % DAYS_PER_WEEK;
    let first_hit = MIN_DAY + offset;
    match ordinal.position() {
        Some(position) => {
            debug_assert!(position <= MIN_WEEKDAY_HITS);
            Some(first_hit + DAYS_PER_WEEK * (position - 1))
        }
        None => {
            let len = days_in_month(year, month)?;
            Some(first_hit + DAYS_PER_WEEK * ((len - first_hit) / DAYS_PER_WEEK))
        }
    }
}

/// Day number of the k-th (or final) Saturday-or-Sunday in the month,
/// counted chronologically across both weekend days.
fn nth_weekend_day(year: i32, month: u32, ordinal: Ordinal) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, MIN_DAY)?;
    let len = usize::try_from(days_in_month(year, month)?).ok()?;
    let hits: Vec<u32> = first
        .iter_days()
        .take(len)
        .filter(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .map(|date| date.day())
        .collect();
    debug_assert!(hits.len() >= MIN_WEEKEND_HITS);
    match ordinal.position() {
        Some(position) => hits.get(usize::try_from(position).ok()? - 1).copied(),
        None => hits.last().copied(),
    }
}
