//! Date-string parsing for front-matter fields
//!
//! `publishedAt` and `updatedAt` stay strings in the data model; ordering
//! and display parse them on demand. Naive datetimes keep the ordering
//! independent of the host timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date string in the formats content authors actually use
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // Date-only strings land on midnight
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with an offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only() {
        let dt = parse_date_string("2024-01-15").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 00:00:00");
        assert!(parse_date_string("2024/01/15").is_some());
    }

    #[test]
    fn test_datetime_formats() {
        assert!(parse_date_string("2024-01-15 10:30:00").is_some());
        assert!(parse_date_string("2024-01-15T10:30:00").is_some());
        assert!(parse_date_string("2024-01-15 10:30").is_some());
    }

    #[test]
    fn test_rfc3339() {
        let dt = parse_date_string("2024-01-15T10:30:00+08:00").unwrap();
        assert_eq!(dt.format("%H").to_string(), "02");
    }

    #[test]
    fn test_ordering_is_by_instant_not_by_string() {
        // "2024-2-9" style strings would order wrong lexicographically
        let a = parse_date_string("2024-09-02").unwrap();
        let b = parse_date_string("2024/10/01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(parse_date_string("next tuesday").is_none());
        assert!(parse_date_string("").is_none());
    }
}
