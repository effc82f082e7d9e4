use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parses a flexible date string from search query parameters.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS`, or full
/// RFC 3339. Bare dates expand to the start of the day, or the end of the day
/// when `is_end` is set, so a date-only search covers whole days.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Parsed timestamp
/// - `None` - Empty or unparseable input
pub fn parse_flexible_date(value: &str, is_end: bool) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let time = if is_end {
            NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)?
        } else {
            NaiveTime::MIN
        };
        return Some(date.and_time(time).and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_bare_date_as_start_of_day() {
        let dt = parse_flexible_date("2026-05-01", false).unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-05-01T00:00:00+00:00");
    }

    #[test]
    fn parses_bare_date_as_end_of_day() {
        let dt = parse_flexible_date("2026-05-01", true).unwrap();
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
        assert_eq!(dt.second(), 59);
    }

    #[test]
    fn parses_datetime_without_seconds() {
        let dt = parse_flexible_date("2026-05-01T14:30", false).unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-05-01T14:30:00+00:00");
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_flexible_date("2026-05-01T14:30:00+02:00", false).unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-05-01T12:30:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_flexible_date("next tuesday", false), None);
        assert_eq!(parse_flexible_date("", false), None);
    }
}
