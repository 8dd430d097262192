use crate::constants::DATE_FORMAT;
use crate::error::AppError;
use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Utc, Weekday};

const HOUR_SECONDS: i32 = 3600;

/// `n`th occurrence (1-based) of `weekday` in a month.
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// UTC offset of US Eastern time at `instant`, in seconds east of UTC.
///
/// Daylight time runs from 02:00 local on the second Sunday of March to
/// 02:00 local on the first Sunday of November. This is the rule in force
/// since 2007; instants in earlier years get the same rule and may be off by
/// an hour around the old transition dates.
pub fn us_eastern_offset_seconds(instant: DateTime<Utc>) -> i32 {
    let year = instant.year();
    let starts = nth_weekday(year, 3, Weekday::Sun, 2)
        .and_then(|day| day.and_hms_opt(7, 0, 0))
        .map(|naive| naive.and_utc());
    let ends = nth_weekday(year, 11, Weekday::Sun, 1)
        .and_then(|day| day.and_hms_opt(6, 0, 0))
        .map(|naive| naive.and_utc());

    match (starts, ends) {
        (Some(starts), Some(ends)) if instant >= starts && instant < ends => -4 * HOUR_SECONDS,
        _ => -5 * HOUR_SECONDS,
    }
}

/// Formats a start time as Eastern and Central clock time, for example
/// `7:00 PM ET (6:00 PM CT)`.
///
/// # Examples
///
/// ```
/// use nhl_stats::data_fetcher::processors::format_game_time;
///
/// assert_eq!(format_game_time("2024-02-02T00:00:00Z").unwrap(), "7:00 PM ET (6:00 PM CT)");
/// assert!(format_game_time("TBD").is_err());
/// ```
pub fn format_game_time(start_time_utc: &str) -> Result<String, AppError> {
    let start = DateTime::parse_from_rfc3339(start_time_utc)
        .map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid start time '{start_time_utc}': {e}"))
        })?
        .with_timezone(&Utc);

    let eastern_seconds = us_eastern_offset_seconds(start);
    let (Some(eastern), Some(central)) = (
        FixedOffset::east_opt(eastern_seconds),
        FixedOffset::east_opt(eastern_seconds - HOUR_SECONDS),
    ) else {
        return Err(AppError::datetime_parse_error("Eastern offset out of range"));
    };

    Ok(format!(
        "{} ET ({} CT)",
        start.with_timezone(&eastern).format("%-I:%M %p"),
        start.with_timezone(&central).format("%-I:%M %p")
    ))
}

/// Start time on the viewer's clock, e.g. `7:00 PM`.
pub fn format_local_time(start_time_utc: &str) -> Result<String, AppError> {
    let start = DateTime::parse_from_rfc3339(start_time_utc).map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid start time '{start_time_utc}': {e}"))
    })?;
    Ok(start.with_timezone(&Local).format("%-I:%M %p").to_string())
}

/// Seconds as `m:ss`.
pub fn format_time_on_ice(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Checks that `date` is a real calendar date in `YYYY-MM-DD` form.
pub fn validate_date(date: &str) -> Result<(), AppError> {
    let well_formed = date.len() == 10
        && date.as_bytes()[4] == b'-'
        && date.as_bytes()[7] == b'-'
        && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(AppError::invalid_date(date))
    }
}

/// Today's local date in `YYYY-MM-DD` form.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_eastern_offset_follows_daylight_time() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(us_eastern_offset_seconds(winter), -5 * 3600);
        assert_eq!(us_eastern_offset_seconds(summer), -4 * 3600);

        // 2024 transitions: 10 March 07:00 UTC and 3 November 06:00 UTC
        let before_spring = Utc.with_ymd_and_hms(2024, 3, 10, 6, 59, 0).unwrap();
        let after_spring = Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap();
        let after_fall = Utc.with_ymd_and_hms(2024, 11, 3, 6, 0, 0).unwrap();
        assert_eq!(us_eastern_offset_seconds(before_spring), -5 * 3600);
        assert_eq!(us_eastern_offset_seconds(after_spring), -4 * 3600);
        assert_eq!(us_eastern_offset_seconds(after_fall), -5 * 3600);
    }

    #[test]
    fn test_eastern_offset_uses_current_rule_for_every_year() {
        // 2025 transitions: 9 March and 2 November
        let before_spring = Utc.with_ymd_and_hms(2025, 3, 9, 6, 59, 0).unwrap();
        let after_spring = Utc.with_ymd_and_hms(2025, 3, 9, 7, 0, 0).unwrap();
        let before_fall = Utc.with_ymd_and_hms(2025, 11, 2, 5, 59, 0).unwrap();
        assert_eq!(us_eastern_offset_seconds(before_spring), -5 * 3600);
        assert_eq!(us_eastern_offset_seconds(after_spring), -4 * 3600);
        assert_eq!(us_eastern_offset_seconds(before_fall), -4 * 3600);

        // 2006 started daylight time on 2 April; the post-2007 dates apply
        let old_rule_standard = Utc.with_ymd_and_hms(2006, 3, 20, 12, 0, 0).unwrap();
        assert_eq!(us_eastern_offset_seconds(old_rule_standard), -4 * 3600);
    }

    #[test]
    fn test_format_game_time_in_daylight_time() {
        assert_eq!(
            format_game_time("2024-04-10T23:30:00Z").unwrap(),
            "7:30 PM ET (6:30 PM CT)"
        );
    }

    #[test]
    fn test_format_time_on_ice() {
        assert_eq!(format_time_on_ice(1325), "22:05");
        assert_eq!(format_time_on_ice(59), "0:59");
        assert_eq!(format_time_on_ice(-4), "0:00");
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-02-01").is_ok());
        assert!(validate_date("2024-2-1").is_err());
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date("tomorrow").is_err());
        assert!(matches!(
            validate_date("01/02/2024"),
            Err(AppError::InvalidDate { .. })
        ));
    }
}
