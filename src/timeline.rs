//! Time unit sequence derivation
//!
//! Turns a `RenderQuery` into an ordered list of `Status` values, one per time
//! unit (day or week). The sequence index is the dot's grid position.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{Error, Result};
use crate::RenderQuery;

/// Classification of a time unit relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Past,
    Current,
    Future,
}

/// Derive the status sequence for a query.
///
/// Range mode (both `start_date` and `end_date` set) yields one unit per
/// calendar day, inclusive. Year mode (`view_type`) spans the current calendar
/// year, by day or by 7-day week starting at Jan 1. Week indices are compared
/// against today's ISO 8601 week number.
pub fn time_units(query: &RenderQuery, today: NaiveDate) -> Result<Vec<Status>> {
    let start = param(&query.start_date);
    let end = param(&query.end_date);
    let view_type = param(&query.view_type);

    if let (Some(start), Some(end)) = (start, end) {
        let start = parse_compact_date(start)?;
        let end = parse_compact_date(end)?;
        if end < start {
            return Err(Error::InvalidDateRange(format!(
                "end date {end} precedes start date {start}"
            )));
        }
        Ok(days_between(start, end, today))
    } else if let Some(view_type) = view_type {
        let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
        let year_end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap();
        match view_type {
            "day" => Ok(days_between(year_start, year_end, today)),
            "week" => Ok(weeks_between(year_start, year_end, today)),
            other => Err(Error::InvalidViewType(other.to_string())),
        }
    } else {
        Err(Error::MissingParameters)
    }
}

// The original service treated empty query values as absent.
fn param(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_compact_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| Error::InvalidDateRange(format!("{s:?} is not a YYYYMMDD date")))
}

fn days_between(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Vec<Status> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| classify(day, today))
        .collect()
}

fn weeks_between(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Vec<Status> {
    let current_week = today.iso_week().week();
    let mut units = Vec::new();
    let mut cursor = start;
    let mut week_index = 1u32;
    while cursor <= end {
        units.push(if week_index == current_week {
            Status::Current
        } else if week_index < current_week {
            Status::Past
        } else {
            Status::Future
        });
        cursor += Duration::weeks(1);
        week_index += 1;
    }
    units
}

fn classify(day: NaiveDate, today: NaiveDate) -> Status {
    if day == today {
        Status::Current
    } else if day < today {
        Status::Past
    } else {
        Status::Future
    }
}
