use std::fmt;

use thiserror::Error;
use time::{OffsetDateTime, UtcOffset};

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Timestamp out of range: {0} ms")]
pub struct TimestampOutOfRange(i64);

impl TimestampMs {
    pub const fn from_milliseconds(ms: i64) -> Self {
        Self(ms)
    }

    pub const fn into_milliseconds(self) -> i64 {
        self.0
    }

    pub fn to_offset_date_time(self, offset: UtcOffset) -> Result<OffsetDateTime, TimestampOutOfRange> {
        let nanos = i128::from(self.0) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map(|dt| dt.to_offset(offset))
            .map_err(|_| TimestampOutOfRange(self.0))
    }

    /// Formats the date part as `month/day/year` without zero padding,
    /// e.g. `6/5/2020`.
    pub fn format_date(self, offset: UtcOffset) -> Result<String, TimestampOutOfRange> {
        let dt = self.to_offset_date_time(offset)?;
        Ok(format!(
            "{}/{}/{}",
            u8::from(dt.month()),
            dt.day(),
            dt.year()
        ))
    }
}

impl From<i64> for TimestampMs {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<TimestampMs> for i64 {
    fn from(from: TimestampMs) -> Self {
        from.0
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2020-06-05T12:00:00Z
    const JUNE_5TH_NOON: i64 = 1_591_358_400_000;

    #[test]
    fn format_in_utc() {
        let ts = TimestampMs::from_milliseconds(JUNE_5TH_NOON);
        assert_eq!(ts.format_date(UtcOffset::UTC).unwrap(), "6/5/2020");
    }

    #[test]
    fn format_respects_viewer_offset() {
        let ts = TimestampMs::from_milliseconds(JUNE_5TH_NOON);
        let east = UtcOffset::from_hms(13, 0, 0).unwrap();
        let west = UtcOffset::from_hms(-13, 0, 0).unwrap();
        assert_eq!(ts.format_date(east).unwrap(), "6/6/2020");
        assert_eq!(ts.format_date(west).unwrap(), "6/4/2020");
    }

    #[test]
    fn two_digit_month_and_day() {
        // 2019-12-31T23:59:59.999Z
        let ts = TimestampMs::from_milliseconds(1_577_836_799_999);
        assert_eq!(ts.format_date(UtcOffset::UTC).unwrap(), "12/31/2019");
    }

    #[test]
    fn out_of_range() {
        let ts = TimestampMs::from_milliseconds(i64::MAX);
        assert!(ts.format_date(UtcOffset::UTC).is_err());
    }
}
