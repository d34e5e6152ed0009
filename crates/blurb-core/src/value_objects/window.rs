//! Creation-time window used to select articles

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::DomainError;

/// Offset-less date-time layouts, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Inclusive `[start, end]` range over article creation times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Sat Feb 10 2018 23:57:38 GMT-0500, the first moment the site published
    pub fn default_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 2, 11, 4, 57, 38)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a window from optional caller bounds, defaulting to
    /// `[default_start, now]`
    pub fn from_bounds(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            start: start.unwrap_or_else(Self::default_start),
            end: end.unwrap_or(now),
        }
    }

    /// Parse a caller-supplied bound: RFC 3339, an ISO date-time without an
    /// offset (taken as UTC), or a bare `YYYY-MM-DD` date taken as midnight
    /// UTC.
    pub fn parse_bound(raw: &str) -> Result<DateTime<Utc>, DomainError> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        if let Some(naive) = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        {
            return Ok(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| DomainError::InvalidTimestamp(raw.to_string()))
    }

    #[inline]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_constant() {
        let start = TimeWindow::default_start();
        assert_eq!(start.to_rfc3339(), "2018-02-11T04:57:38+00:00");
    }

    #[test]
    fn test_from_bounds_defaults() {
        let now = Utc::now();
        let window = TimeWindow::from_bounds(None, None, now);
        assert_eq!(window.start, TimeWindow::default_start());
        assert_eq!(window.end, now);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let start = TimeWindow::parse_bound("2020-01-01").unwrap();
        let end = TimeWindow::parse_bound("2020-01-02T00:00:00Z").unwrap();
        let window = TimeWindow::new(start, end);
        assert!(window.contains(start));
        assert!(window.contains(end));
        assert!(!window.contains(end + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_parse_bound_with_offset() {
        let ts = TimeWindow::parse_bound("2018-02-10T23:57:38-05:00").unwrap();
        assert_eq!(ts, TimeWindow::default_start());
    }

    #[test]
    fn test_parse_bound_without_offset_is_utc() {
        let expected = Utc.with_ymd_and_hms(2018, 2, 10, 12, 0, 0).unwrap();
        assert_eq!(TimeWindow::parse_bound("2018-02-10T12:00:00").unwrap(), expected);
        assert_eq!(TimeWindow::parse_bound("2018-02-10T12:00").unwrap(), expected);

        let millis = TimeWindow::parse_bound("2018-02-10T12:00:00.250").unwrap();
        assert_eq!(millis, expected + chrono::Duration::milliseconds(250));
    }

    #[test]
    fn test_parse_bound_rejects_garbage() {
        let err = TimeWindow::parse_bound("last tuesday").unwrap_err();
        assert!(err.is_validation());
    }
}
