//! Date-window helpers.

use chrono::NaiveDate;

/// Timestamp format the search API expects: ISO-8601 with millisecond
/// precision and a UTC marker, e.g. `2024-08-25T14:17:54.241Z`.
const SEARCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Expand a start/end date pair into the full-day publication window sent to
/// the search API: midnight at the start of the first day through the last
/// millisecond of the last day.
pub fn search_window(start_date: NaiveDate, end_date: NaiveDate) -> (String, String) {
    // Constant times, always in range.
    let start = start_date.and_hms_milli_opt(0, 0, 0, 0).unwrap();
    let end = end_date.and_hms_milli_opt(23, 59, 59, 999).unwrap();
    (
        start.format(SEARCH_TIMESTAMP_FORMAT).to_string(),
        end.format(SEARCH_TIMESTAMP_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_window_formats_full_days() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let (start_str, end_str) = search_window(start, end);
        assert_eq!(start_str, "2024-01-01T00:00:00.000Z");
        assert_eq!(end_str, "2024-01-02T23:59:59.999Z");
    }

    #[test]
    fn test_search_window_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 8, 25).unwrap();

        let (start_str, end_str) = search_window(day, day);
        assert_eq!(start_str, "2024-08-25T00:00:00.000Z");
        assert_eq!(end_str, "2024-08-25T23:59:59.999Z");
    }
}
