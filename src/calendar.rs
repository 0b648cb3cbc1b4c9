//! Flattens a plan's week/day structure into a dated day sequence.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::dates::parse_plan_start_date;
use crate::domain::plan::{CalendarEntry, Plan, PlanProgress};

/// Keys the builder computes; same-named day fields are replaced.
const DAY_NUMBER_KEY: &str = "dayNumber";
const DATE_KEY: &str = "date";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid plan start date: {0:?}")]
    InvalidStartDate(String),

    #[error("plan day {0} falls outside the supported date range")]
    DateOutOfRange(usize),
}

/// Parses the plan's start date, given as `dd-mm-yyyy` or ISO-8601.
pub fn plan_start_date(plan: &Plan) -> Result<NaiveDate, CalendarError> {
    parse_plan_start_date(&plan.start_date)
        .ok_or_else(|| CalendarError::InvalidStartDate(plan.start_date.clone()))
}

/// Builds the calendar entries of `plan`, one per day, in week-then-day order.
///
/// Day numbers run from 1 across the whole plan and each entry is dated one
/// day after the previous one, starting at the plan's start date. Day records
/// are not validated. The plan is left untouched.
pub fn build_calendar(plan: &Plan) -> Result<Vec<CalendarEntry>, CalendarError> {
    let start = plan_start_date(plan)?;
    build_calendar_from(plan, start)
}

/// Same as [`build_calendar`] with an already parsed start date.
pub fn build_calendar_from(
    plan: &Plan,
    start: NaiveDate,
) -> Result<Vec<CalendarEntry>, CalendarError> {
    let entries = plan
        .weeks
        .iter()
        .flat_map(|week| week.days.iter())
        .enumerate()
        .map(|(offset, day)| -> Result<CalendarEntry, CalendarError> {
            let day_number = offset + 1;
            let date = start
                .checked_add_days(Days::new(offset as u64))
                .ok_or(CalendarError::DateOutOfRange(day_number))?;

            let mut fields = day.fields.clone();
            fields.remove(DAY_NUMBER_KEY);
            fields.remove(DATE_KEY);

            Ok(CalendarEntry {
                fields,
                day_number,
                date,
            })
        })
        .collect::<Result<Vec<_>, CalendarError>>()?;

    log::debug!("Built calendar with {} days starting {start}", entries.len());

    Ok(entries)
}

/// Date of the last entry, if the calendar has any.
pub fn plan_end_date(entries: &[CalendarEntry]) -> Option<NaiveDate> {
    entries.last().map(|entry| entry.date)
}

/// Derives how far through `entries` a member is on `today`.
pub fn plan_progress(entries: &[CalendarEntry], today: NaiveDate) -> PlanProgress {
    let total_days = entries.len();
    let completed_days = entries.iter().filter(|entry| entry.date < today).count();
    let current_day = entries
        .iter()
        .find(|entry| entry.date == today)
        .map(|entry| entry.day_number);
    let percent_complete = if total_days == 0 {
        0
    } else {
        (completed_days * 100 / total_days) as u8
    };

    PlanProgress {
        total_days,
        completed_days,
        current_day,
        percent_complete,
    }
}
