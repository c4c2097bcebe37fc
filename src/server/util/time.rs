//! Date and time helpers.
//!
//! Request parameters carry dates as `YYYY-MM-DD`, times of day as `HH:MM` or
//! `HH:MM:SS` and plan datetimes as `YYYY-MM-DD HH:MM:SS`. Whether a session has ended
//! is judged against the server's local clock, the same clock users schedule in.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::server::error::request::RequestError;

pub static DATE_FORMAT: &str = "%Y-%m-%d";
pub static DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Longest range a day-by-day schedule may span, both ends included
pub static MAX_RANGE_DAYS: i64 = 366;

/// Parses a `YYYY-MM-DD` date, naming `field` in the validation error
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        RequestError::Validation(format!("{} must be a date in YYYY-MM-DD format", field))
    })
}

/// Parses an optional date parameter, treating an empty string as absent
pub fn parse_optional_date(
    field: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, RequestError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_date(field, value).map(Some),
        None => Ok(None),
    }
}

/// Parses a time of day given as `HH:MM` or `HH:MM:SS`
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, RequestError> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            RequestError::Validation(format!("{} must be a time in HH:MM or HH:MM:SS format", field))
        })
}

pub fn parse_datetime(field: &str, value: &str) -> Result<NaiveDateTime, RequestError> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT).map_err(|_| {
        RequestError::Validation(format!(
            "{} must be a datetime in YYYY-MM-DD HH:MM:SS format",
            field
        ))
    })
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Current wall-clock time of the server
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Whether a session held on `date` until `end` has finished at `now`
pub fn class_ended(date: NaiveDate, end: NaiveTime, now: NaiveDateTime) -> bool {
    date.and_time(end) <= now
}

/// Parses a required inclusive date range, rejecting `start > end` and ranges longer
/// than [`MAX_RANGE_DAYS`]
pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), RequestError> {
    let start = parse_optional_date("startDate", start)?
        .ok_or_else(|| RequestError::Validation("startDate is required".to_string()))?;
    let end = parse_optional_date("endDate", end)?
        .ok_or_else(|| RequestError::Validation("endDate is required".to_string()))?;

    if start > end {
        return Err(RequestError::Validation(
            "startDate must not be after endDate".to_string(),
        ));
    }
    if (end - start).num_days() + 1 > MAX_RANGE_DAYS {
        return Err(RequestError::Validation(format!(
            "Date range must not exceed {} days",
            MAX_RANGE_DAYS
        )));
    }

    Ok((start, end))
}

/// Every date from `start` to `end`, both inclusive
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Monday and Sunday of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);

    (monday, monday + Duration::days(6))
}

/// January 1st of the year containing `date`
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

pub fn day_of_week(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Length of a session in hours
pub fn duration_hours(begin: NaiveTime, end: NaiveTime) -> f64 {
    (end - begin).num_minutes() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Expect both minute and second precision times to parse
    #[test]
    fn parses_short_and_long_times() {
        assert_eq!(
            parse_time("classBeginTime", "14:00").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("classBeginTime", "14:00:30").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 30).unwrap()
        );
        assert!(parse_time("classBeginTime", "2pm").is_err());
    }

    /// Expect malformed dates to produce a validation error naming the field
    #[test]
    fn rejects_bad_date() {
        let err = parse_date("startDate", "2024/01/15").unwrap_err();

        assert!(matches!(err, RequestError::Validation(ref m) if m.contains("startDate")));
    }

    /// Expect a reversed range to be rejected
    #[test]
    fn rejects_reversed_range() {
        assert!(parse_date_range(Some("2024-02-01"), Some("2024-01-01")).is_err());
        assert!(parse_date_range(None, Some("2024-01-01")).is_err());

        let (start, end) = parse_date_range(Some("2024-01-01"), Some("2024-01-01")).unwrap();
        assert_eq!(start, end);
    }

    /// Expect a full leap year to pass and anything longer to be rejected
    #[test]
    fn caps_range_length() {
        assert!(parse_date_range(Some("2024-01-01"), Some("2024-12-31")).is_ok());

        let err = parse_date_range(Some("2024-01-01"), Some("2025-01-01")).unwrap_err();
        assert!(matches!(err, RequestError::Validation(ref m) if m.contains("366")));
        assert!(parse_date_range(Some("0001-01-01"), Some("9999-12-31")).is_err());
    }

    /// Expect a session to count as ended exactly at its end time
    #[test]
    fn class_ends_at_end_time() {
        let day = date(2024, 1, 15);
        let end = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

        assert!(!class_ended(day, end, day.and_hms_opt(15, 59, 59).unwrap()));
        assert!(class_ended(day, end, day.and_hms_opt(16, 0, 0).unwrap()));
        assert!(class_ended(day, end, date(2024, 1, 16).and_hms_opt(8, 0, 0).unwrap()));
    }

    #[test]
    fn week_runs_monday_to_sunday() {
        // 2024-01-17 is a Wednesday
        let (monday, sunday) = week_bounds(date(2024, 1, 17));

        assert_eq!(monday, date(2024, 1, 15));
        assert_eq!(sunday, date(2024, 1, 21));
        assert_eq!(day_of_week(monday), "Monday");
        assert_eq!(days_between(monday, sunday).len(), 7);
    }

    #[test]
    fn session_hours() {
        let begin = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(15, 30, 0).unwrap();

        assert_eq!(duration_hours(begin, end), 1.5);
    }
}
