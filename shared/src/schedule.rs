//! ==============================================================================
//! schedule.rs - claim window date/time/offset handling
//! ==============================================================================
//!
//! purpose:
//!     the form edits a claim window as three separate fields (date, time,
//!     whole-hour utc offset). the api stores one string per bound, shaped
//!     `dd-MMM-yyyy HH:mm:00±HH` (e.g. `01-Jun-2024 10:00:00+00`). this
//!     module converts between the two and compares bounds as instants.
//!
//! accepted input:
//!     date    yyyy-mm-dd (html date input) or MM-dd-yyyy, four digit years
//!     time    HH:mm or HH:mm:ss (seconds are dropped on output)
//!     offset  ±H, ±HH, ±HHMM, ±HH:MM with zero minutes, -12..=+14
//!     stored  the format above, yyyy-mm-dd HH:mm:ss±HH (space or `T`), or
//!             rfc3339, always with a whole-hour offset
//!
//! ==============================================================================

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// lowest offset offered by the form, in hours
pub const MIN_OFFSET_HOURS: i8 = -12;
/// highest offset offered by the form, in hours
pub const MAX_OFFSET_HOURS: i8 = 14;

/// stored timestamp bodies that carry a trailing `±HH`
const STORED_BODY_FORMATS: [&str; 3] = [
    "%d-%b-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid date `{0}`, expected yyyy-mm-dd or MM-dd-yyyy")]
    Date(String),
    #[error("invalid time `{0}`, expected HH:mm")]
    Time(String),
    #[error("invalid timezone offset `{0}`")]
    Offset(String),
    #[error("timezone offset must be between -12 and +14 hours, got {0}")]
    OffsetRange(i32),
    #[error("unrecognised timestamp `{0}`")]
    Timestamp(String),
}

// ==============================================================================
// timezone offset
// ==============================================================================

/// whole-hour utc offset, rendered as ±HH
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TzOffset(i8);

impl TzOffset {
    pub const UTC: TzOffset = TzOffset(0);

    pub fn from_hours(hours: i32) -> Result<Self, ScheduleError> {
        if !(MIN_OFFSET_HOURS as i32..=MAX_OFFSET_HOURS as i32).contains(&hours) {
            return Err(ScheduleError::OffsetRange(hours));
        }
        Ok(TzOffset(hours as i8))
    }

    /// offsets with a minute component are rejected
    pub fn from_seconds(seconds: i32) -> Result<Self, ScheduleError> {
        if seconds % 3600 != 0 {
            return Err(ScheduleError::Offset(format!("{seconds}s")));
        }
        Self::from_hours(seconds / 3600)
    }

    pub fn parse(raw: &str) -> Result<Self, ScheduleError> {
        let s = raw.trim();
        let bad = || ScheduleError::Offset(raw.to_string());
        if !s.is_ascii() {
            return Err(bad());
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(bad()),
        };

        let (hh, mm) = match rest.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None if rest.len() == 4 => (&rest[..2], Some(&rest[2..])),
            None => (rest, None),
        };

        if hh.is_empty() || hh.len() > 2 || !hh.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        if let Some(mm) = mm {
            if mm != "00" {
                return Err(bad());
            }
        }

        let hours: i32 = hh.parse().map_err(|_| bad())?;
        Self::from_hours(sign * hours)
    }

    pub fn hours(self) -> i8 {
        self.0
    }

    /// every offset the form offers, west to east
    pub fn options() -> Vec<TzOffset> {
        (MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).map(TzOffset).collect()
    }

    fn fixed(self) -> Result<FixedOffset, ScheduleError> {
        FixedOffset::east_opt(self.0 as i32 * 3600)
            .ok_or(ScheduleError::OffsetRange(self.0 as i32))
    }
}

impl fmt::Display for TzOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        write!(f, "{}{:02}", sign, self.0.unsigned_abs())
    }
}

// ==============================================================================
// field parsing
// ==============================================================================

/// `yyyy-mm-dd` or `MM-dd-yyyy`, zero padded
pub fn parse_date(raw: &str) -> Result<NaiveDate, ScheduleError> {
    let s = raw.trim();
    let format = if has_shape(s, "9999-99-99") {
        "%Y-%m-%d"
    } else if has_shape(s, "99-99-9999") {
        "%m-%d-%Y"
    } else {
        return Err(ScheduleError::Date(raw.to_string()));
    };
    NaiveDate::parse_from_str(s, format).map_err(|_| ScheduleError::Date(raw.to_string()))
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, ScheduleError> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ScheduleError::Time(raw.to_string()))
}

/// `9` in `shape` stands for any ascii digit, every other byte must match
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'9' => c.is_ascii_digit(),
            p => c == p,
        })
}

/// combine the three form fields into one instant
pub fn compose(
    date: NaiveDate,
    time: NaiveTime,
    offset: TzOffset,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let local = NaiveDateTime::new(date, time);
    offset
        .fixed()?
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| ScheduleError::Timestamp(local.to_string()))
}

// ==============================================================================
// stored timestamps
// ==============================================================================

/// render an instant in the api's `dd-MMM-yyyy HH:mm:00±HH` shape
///
/// seconds are always written as `00`.
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> Result<String, ScheduleError> {
    let offset = TzOffset::from_seconds(at.offset().local_minus_utc())?;
    Ok(format!("{}{}", at.format("%d-%b-%Y %H:%M:00"), offset))
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let s = raw.trim();

    if s.is_ascii() && s.len() > 3 {
        let (body, offset) = s.split_at(s.len() - 3);
        if offset.starts_with(|c: char| c == '+' || c == '-') {
            let local = STORED_BODY_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(body, format).ok());
            if let Some(local) = local {
                let offset = TzOffset::parse(offset)?;
                return compose(local.date(), local.time(), offset);
            }
        }
    }

    let at = DateTime::parse_from_rfc3339(s).map_err(|_| ScheduleError::Timestamp(raw.to_string()))?;
    // reject offsets the form cannot represent
    TzOffset::from_seconds(at.offset().local_minus_utc())?;
    Ok(at)
}

// ==============================================================================
// form fields
// ==============================================================================

/// one claim window bound as the form edits it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleFields {
    /// yyyy-mm-dd
    pub date: String,
    /// HH:mm
    pub time: String,
    /// ±HH
    pub offset: String,
}

impl Default for ScheduleFields {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            offset: TzOffset::UTC.to_string(),
        }
    }
}

impl ScheduleFields {
    /// split a stored timestamp back into editable fields
    pub fn from_timestamp(raw: &str) -> Result<Self, ScheduleError> {
        let at = parse_timestamp(raw)?;
        let offset = TzOffset::from_seconds(at.offset().local_minus_utc())?;
        Ok(Self {
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M").to_string(),
            offset: offset.to_string(),
        })
    }

    pub fn to_datetime(&self) -> Result<DateTime<FixedOffset>, ScheduleError> {
        compose(
            parse_date(&self.date)?,
            parse_time(&self.time)?,
            TzOffset::parse(&self.offset)?,
        )
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fields(date: &str, time: &str, offset: &str) -> ScheduleFields {
        ScheduleFields {
            date: date.into(),
            time: time.into(),
            offset: offset.into(),
        }
    }

    #[test]
    fn test_offset_display() {
        assert_eq!(TzOffset::UTC.to_string(), "+00");
        assert_eq!(TzOffset::from_hours(-5).unwrap().to_string(), "-05");
        assert_eq!(TzOffset::from_hours(14).unwrap().to_string(), "+14");
    }

    #[test]
    fn test_offset_parse_variants() {
        for raw in ["+05", "+5", "+0500", "+05:00", " +05 "] {
            assert_eq!(TzOffset::parse(raw).unwrap().hours(), 5, "{raw}");
        }
        assert_eq!(TzOffset::parse("-12").unwrap().hours(), -12);
    }

    #[test]
    fn test_offset_rejects_bad_input() {
        assert!(matches!(TzOffset::parse("05"), Err(ScheduleError::Offset(_))));
        assert!(matches!(TzOffset::parse("+05:30"), Err(ScheduleError::Offset(_))));
        assert!(matches!(TzOffset::parse("+abc"), Err(ScheduleError::Offset(_))));
        assert_eq!(TzOffset::parse("+15"), Err(ScheduleError::OffsetRange(15)));
        assert_eq!(TzOffset::parse("-13"), Err(ScheduleError::OffsetRange(-13)));
    }

    #[test]
    fn test_offset_options_cover_range() {
        let options = TzOffset::options();
        assert_eq!(options.len(), 27);
        assert_eq!(options.first().map(|o| o.hours()), Some(-12));
        assert_eq!(options.last().map(|o| o.hours()), Some(14));
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_date("2024-06-01").unwrap(), expected);
        assert_eq!(parse_date("06-01-2024").unwrap(), expected);
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_date_rejects_short_years() {
        assert_eq!(parse_date("06-01-24"), Err(ScheduleError::Date("06-01-24".into())));
        assert!(parse_date("6-1-24").is_err());
        assert!(parse_date("1-1-1").is_err());
        assert!(parse_date("24-06-01").is_err());
        assert!(parse_date("2024-6-1").is_err());
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(parse_time("10:00").unwrap(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(parse_time("23:59:30").unwrap(), NaiveTime::from_hms_opt(23, 59, 30).unwrap());
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("10h").is_err());
    }

    #[test]
    fn test_format_matches_api_shape() {
        let at = fields("06-01-2024", "10:00", "+00").to_datetime().unwrap();
        assert_eq!(format_timestamp(&at).unwrap(), "01-Jun-2024 10:00:00+00");

        let at = fields("2024-12-31", "23:15:45", "-05").to_datetime().unwrap();
        assert_eq!(format_timestamp(&at).unwrap(), "31-Dec-2024 23:15:00-05");
    }

    #[test]
    fn test_compare_across_offsets() {
        // 10:00+02 is 08:00 utc, before 09:00+00
        let start = fields("2024-06-01", "10:00", "+02").to_datetime().unwrap();
        let end = fields("2024-06-01", "09:00", "+00").to_datetime().unwrap();
        assert!(start < end);
    }

    #[test]
    fn test_fields_from_stored_timestamp() {
        let parsed = ScheduleFields::from_timestamp("01-Jun-2024 10:00:00+00").unwrap();
        assert_eq!(parsed, fields("2024-06-01", "10:00", "+00"));

        let parsed = ScheduleFields::from_timestamp("15-Jan-2025 07:30:00-03").unwrap();
        assert_eq!(parsed, fields("2025-01-15", "07:30", "-03"));
    }

    #[test]
    fn test_fields_from_rfc3339() {
        let parsed = ScheduleFields::from_timestamp("2024-06-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, fields("2024-06-01", "10:00", "+02"));

        let parsed = ScheduleFields::from_timestamp("2024-06-01T10:00:00Z").unwrap();
        assert_eq!(parsed.offset, "+00");
    }

    #[test]
    fn test_fields_from_iso_body_with_hour_offset() {
        let parsed = ScheduleFields::from_timestamp("2024-06-01 10:00:00+00").unwrap();
        assert_eq!(parsed, fields("2024-06-01", "10:00", "+00"));

        let parsed = ScheduleFields::from_timestamp("2024-06-01T10:00:00-05").unwrap();
        assert_eq!(parsed, fields("2024-06-01", "10:00", "-05"));

        let parsed = ScheduleFields::from_timestamp("2024-06-01T10:00:00.000Z").unwrap();
        assert_eq!(parsed, fields("2024-06-01", "10:00", "+00"));
    }

    #[test]
    fn test_iso_body_resubmits_in_api_shape() {
        let edited = ScheduleFields::from_timestamp("2024-06-01 10:00:00+02").unwrap();
        let at = edited.to_datetime().unwrap();
        assert_eq!(format_timestamp(&at).unwrap(), "01-Jun-2024 10:00:00+02");
    }

    #[test]
    fn test_unrepresentable_timestamps() {
        assert!(ScheduleFields::from_timestamp("2024-06-01T10:00:00+05:30").is_err());
        assert!(ScheduleFields::from_timestamp("yesterday").is_err());
        assert!(ScheduleFields::from_timestamp("").is_err());
    }

    #[test]
    fn test_default_fields_use_utc() {
        let empty = ScheduleFields::default();
        assert_eq!(empty.offset, "+00");
        assert!(empty.to_datetime().is_err());
    }

    proptest! {
        #[test]
        fn prop_stored_timestamp_round_trips(
            year in 1990i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            offset in MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            let at = compose(date, time, TzOffset(offset)).unwrap();
            let stored = format_timestamp(&at).unwrap();

            let edited = ScheduleFields::from_timestamp(&stored).unwrap();
            let resubmitted = format_timestamp(&edited.to_datetime().unwrap()).unwrap();
            prop_assert_eq!(resubmitted, stored);
        }
    }
}
