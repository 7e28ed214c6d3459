//! Week/date helpers: which week of the timeline a calendar date falls in.

use chrono::NaiveDate;
use timeline_types::Week;

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Does `date` fall within the week's start..=end range?
///
/// Weeks with unparseable boundary dates match nothing.
pub fn is_date_in_week(date: NaiveDate, week: &Week) -> bool {
    match (parse_iso_date(&week.start_date), parse_iso_date(&week.end_date)) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

/// Find the week number containing `date`.
///
/// Dates before the timeline clamp to week 1; dates after it clamp to
/// the last week's number. An empty timeline yields week 1.
pub fn current_week_number(weeks: &[Week], date: NaiveDate) -> u32 {
    if let Some(week) = weeks.iter().find(|w| is_date_in_week(date, w)) {
        return week.week;
    }

    let before_start = weeks
        .first()
        .and_then(|w| parse_iso_date(&w.start_date))
        .is_some_and(|start| date < start);
    if before_start {
        return 1;
    }

    weeks.last().map(|w| w.week).unwrap_or(1)
}

/// Zero-padded week label, e.g. `"W07"`.
pub fn format_week_number(week: u32) -> String {
    format!("W{week:02}")
}

#[cfg(test)]
mod tests {
    use timeline_types::Lesson;

    use super::*;

    fn week(number: u32, start: &str, end: &str) -> Week {
        Week {
            week: number,
            start_date: start.to_string(),
            end_date: end.to_string(),
            date_label: String::new(),
            cfm: Lesson {
                title: String::new(),
                link: String::new(),
                reading: String::new(),
                excerpt: None,
                image: None,
            },
            chronological: Vec::new(),
            cfm_daily: None,
        }
    }

    fn timeline() -> Vec<Week> {
        vec![
            week(1, "2022-01-03", "2022-01-09"),
            week(2, "2022-01-10", "2022-01-16"),
            week(3, "2022-01-17", "2022-01-23"),
        ]
    }

    fn date(text: &str) -> NaiveDate {
        parse_iso_date(text).unwrap()
    }

    #[test]
    fn test_date_in_week_bounds() {
        let w = week(1, "2022-01-03", "2022-01-09");
        assert!(is_date_in_week(date("2022-01-03"), &w));
        assert!(is_date_in_week(date("2022-01-09"), &w));
        assert!(!is_date_in_week(date("2022-01-10"), &w));
    }

    #[test]
    fn test_current_week_inside_timeline() {
        assert_eq!(current_week_number(&timeline(), date("2022-01-12")), 2);
    }

    #[test]
    fn test_current_week_clamps_outside_timeline() {
        assert_eq!(current_week_number(&timeline(), date("2021-12-25")), 1);
        assert_eq!(current_week_number(&timeline(), date("2022-06-01")), 3);
    }

    #[test]
    fn test_format_week_number() {
        assert_eq!(format_week_number(7), "W07");
        assert_eq!(format_week_number(52), "W52");
    }
}
