use chrono::{prelude::*, Duration};
use serde::Serializer;

pub type UtcTimestamp = DateTime<Utc>;

/// ISO-8601 combined date-time, always with microsecond precision
pub const EPOCH_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

pub fn format_epoch(epoch: &UtcTimestamp) -> String {
    epoch.format(EPOCH_UTC_FORMAT).to_string()
}

/// Builds a timestamp from a four-digit year and a fractional day-of-year,
/// where day 1.0 is January 1st 00:00 UTC.
///
/// Returns `None` when the day falls outside of the given year.
pub fn epoch_from_day_of_year(year: i32, day_of_year: f64) -> Option<UtcTimestamp> {
    if !day_of_year.is_finite() || day_of_year < 1.0 {
        return None;
    }
    let days_in_year = if NaiveDate::from_yo_opt(year, 366).is_some() {
        366.0
    } else {
        365.0
    };
    if day_of_year >= days_in_year + 1.0 {
        return None;
    }

    let micros = ((day_of_year - 1.0) * MICROS_PER_DAY).round() as i64;
    let start_of_year = NaiveDate::from_yo_opt(year, 1)?.and_hms_opt(0, 0, 0)?;
    let t = start_of_year.checked_add_signed(Duration::microseconds(micros))?;
    Some(t.and_utc())
}

pub(crate) fn serialize_epoch<S: Serializer>(
    epoch: &UtcTimestamp,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&epoch.format(EPOCH_UTC_FORMAT))
}
