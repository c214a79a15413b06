use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;

/// The only timestamp layout timeline files use, e.g. `1990-06-15 00:00:00`.
/// Fixed-width and zero-padded, so string order equals chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human readable date used in anniversary lines, e.g. `June 15, 1990`.
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Hours in the fixed-length year used to compute elapsed years.
pub const HOURS_PER_YEAR: i64 = 8760;

/// Template of [`TIMESTAMP_FORMAT`]: `#` is a digit, anything else is literal.
const TIMESTAMP_LAYOUT: &[u8; 19] = b"####-##-## ##:##:##";

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("expected YYYY-MM-DD HH:MM:SS")]
    Layout,
    #[error(transparent)]
    Format(#[from] chrono::ParseError),
}

/// Parses a timestamp in exactly the [`TIMESTAMP_FORMAT`] layout. Surrounding
/// whitespace, missing zero padding or a missing time are rejected.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let bytes = value.as_bytes();
    let matches_layout = bytes.len() == TIMESTAMP_LAYOUT.len()
        && bytes
            .iter()
            .zip(TIMESTAMP_LAYOUT)
            .all(|(b, t)| if *t == b'#' { b.is_ascii_digit() } else { b == t });
    if !matches_layout {
        return Err(TimestampError::Layout);
    }
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

/// Whole years between `start` and `now`, counting every year as 8760 hours.
/// Leap days are not accounted for, so the figure is approximate around
/// anniversaries.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use otd_core::dates::years_elapsed;
/// let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let now = NaiveDate::from_ymd_opt(2010, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// assert_eq!(years_elapsed(start, now), 10);
/// ```
pub fn years_elapsed(start: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - start).num_hours() / HOURS_PER_YEAR
}

/// Month and day match, year ignored.
pub fn is_same_day_of_year(date: NaiveDateTime, month: u32, day: u32) -> bool {
    date.month() == month && date.day() == day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_fixed_format() {
        let parsed = parse_timestamp("1990-06-15 13:45:10").expect("valid");
        assert_eq!(parsed, dt(1990, 6, 15) + Duration::seconds(13 * 3600 + 45 * 60 + 10));
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_timestamp("not-a-date").is_err());
        assert!(parse_timestamp("1990-06-15").is_err());
        assert!(parse_timestamp("15/06/1990 00:00:00").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(matches!(
            parse_timestamp(" 1990-06-15 00:00:00"),
            Err(TimestampError::Layout)
        ));
        assert!(parse_timestamp("1990-06-15 00:00:00 ").is_err());
        assert!(parse_timestamp("1990-06-15 00:00:00\n").is_err());
        assert!(parse_timestamp("1990-6-15 00:00:00").is_err());
    }

    #[test]
    fn rejects_impossible_dates_in_the_right_layout() {
        assert!(matches!(
            parse_timestamp("1990-02-30 00:00:00"),
            Err(TimestampError::Format(_))
        ));
        assert!(parse_timestamp("1990-06-15 24:00:00").is_err());
    }

    #[test]
    fn ten_years_with_fixed_year_length() {
        let now = dt(2026, 10, 19);
        for days in 3650..=3653 {
            let start = now - Duration::days(days);
            assert_eq!(years_elapsed(start, now), 10, "{days} days");
        }
        assert_eq!(years_elapsed(now - Duration::days(3649), now), 9);
    }

    #[test]
    fn follows_the_8760_hour_formula() {
        let now = dt(2026, 10, 19);
        let start = now - Duration::hours(8760 * 3 - 1);
        assert_eq!(years_elapsed(start, now), 2);
        let start = now - Duration::hours(8760 * 3);
        assert_eq!(years_elapsed(start, now), 3);
    }

    #[test]
    fn same_day_of_year_ignores_year() {
        assert!(is_same_day_of_year(dt(1990, 6, 15), 6, 15));
        assert!(is_same_day_of_year(dt(2020, 6, 15), 6, 15));
        assert!(!is_same_day_of_year(dt(1990, 6, 15), 6, 16));
        assert!(!is_same_day_of_year(dt(1990, 6, 15), 7, 15));
    }
}
