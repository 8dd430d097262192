use crate::constants::game_type;
use chrono::{DateTime, Datelike, Local, TimeZone};

/// Season id for the season in progress, e.g. `20242025`.
///
/// A season starts in October, so dates from January to September belong
/// to the season that began the previous autumn.
pub fn current_season_id() -> i32 {
    current_season_id_with_time(Local::now())
}

/// Deterministic variant of [`current_season_id`] for a given instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nhl_stats::data_fetcher::processors::current_season_id_with_time;
///
/// let march = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// assert_eq!(current_season_id_with_time(march), 20232024);
///
/// let november = Utc.with_ymd_and_hms(2024, 11, 1, 12, 0, 0).unwrap();
/// assert_eq!(current_season_id_with_time(november), 20242025);
/// ```
pub fn current_season_id_with_time<Tz: TimeZone>(now: DateTime<Tz>) -> i32 {
    let year = if now.month() < 10 {
        now.year() - 1
    } else {
        now.year()
    };
    season_id_for_start_year(year)
}

pub fn season_id_for_start_year(year: i32) -> i32 {
    year * 10000 + year + 1
}

/// `20232024` becomes `2023-2024`.
pub fn format_season_id(season_id: i32) -> String {
    let start = season_id / 10000;
    format!("{}-{}", start, start + 1)
}

/// Accepts `20232024`, `2023-2024` or `2023-24`.
pub fn parse_season_id(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    if let Some((start, end)) = trimmed.split_once('-') {
        let start: i32 = start.parse().ok()?;
        let end: i32 = end.parse().ok()?;
        let expected_end = start + 1;
        let matches_end = end == expected_end || end == expected_end % 100;
        return (matches_end && start > 0).then(|| season_id_for_start_year(start));
    }

    let id: i32 = trimmed.parse().ok()?;
    (id > 0).then_some(id)
}

pub fn game_type_name(game_type_id: i32) -> &'static str {
    match game_type_id {
        game_type::PRESEASON => "Preseason",
        game_type::REGULAR_SEASON => "Regular Season",
        game_type::PLAYOFFS => "Playoff",
        game_type::ALL_STAR => "All-Star",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_season_flips_in_october() {
        let september = Utc.with_ymd_and_hms(2024, 9, 30, 23, 0, 0).unwrap();
        let october = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
        let january = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();

        assert_eq!(current_season_id_with_time(september), 20232024);
        assert_eq!(current_season_id_with_time(october), 20242025);
        assert_eq!(current_season_id_with_time(january), 20242025);
    }

    #[test]
    fn test_format_season_id() {
        assert_eq!(format_season_id(20232024), "2023-2024");
        assert_eq!(format_season_id(19992000), "1999-2000");
    }

    #[test]
    fn test_parse_season_id_forms() {
        assert_eq!(parse_season_id("20232024"), Some(20232024));
        assert_eq!(parse_season_id("2023-2024"), Some(20232024));
        assert_eq!(parse_season_id("2023-24"), Some(20232024));
        assert_eq!(parse_season_id(" 20222023 "), Some(20222023));
        assert_eq!(parse_season_id("2023-2025"), None);
        assert_eq!(parse_season_id("abc"), None);
        assert_eq!(parse_season_id("0"), None);
    }

    #[test]
    fn test_game_type_names() {
        assert_eq!(game_type_name(2), "Regular Season");
        assert_eq!(game_type_name(3), "Playoff");
        assert_eq!(game_type_name(4), "All-Star");
        assert_eq!(game_type_name(9), "Unknown");
    }
}
