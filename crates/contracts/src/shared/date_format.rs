//! Timestamp formatting for list columns.
//!
//! The API returns `updated_at` either as an RFC 3339 instant or as a bare
//! wall-clock string. Instants are shifted into the display zone, wall
//! clock values are shown as they are.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// `dd/MM/yyyy HH:mm`
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Western Indonesia Time, the vendor's home zone.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 7 * 60;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Fixed offset timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
}

impl DisplayZone {
    /// Out-of-range offsets fall back to UTC.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Self { offset }
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::from_offset_minutes(DEFAULT_UTC_OFFSET_MINUTES)
    }
}

/// Format a raw timestamp string as `dd/MM/yyyy HH:mm`.
///
/// Values that match none of the known layouts are returned unchanged.
pub fn format_timestamp(raw: &str, zone: DisplayZone) -> String {
    let raw = raw.trim();

    let instant = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z"));
    if let Ok(instant) = instant {
        return instant
            .with_timezone(&zone.offset)
            .format(DISPLAY_FORMAT)
            .to_string();
    }

    if let Some(local) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return local.format(DISPLAY_FORMAT).to_string();
    }

    // Date-only values are midnight UTC.
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return midnight
            .and_utc()
            .with_timezone(&zone.offset)
            .format(DISPLAY_FORMAT)
            .to_string();
    }

    raw.to_string()
}

/// Format epoch milliseconds as `dd/MM/yyyy HH:mm`.
pub fn format_epoch_millis(millis: i64, zone: DisplayZone) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| {
        dt.with_timezone(&zone.offset)
            .format(DISPLAY_FORMAT)
            .to_string()
    })
}
