//! ISO-8601 parsing and epoch-millisecond conversion for Format-2 timestamps.
//!
//! Accepted shape: `YYYY-MM-DD`, optionally followed by `T` (or a single
//! space) and `HH[:MM[:SS[.fraction]]]`, optionally followed by `Z`,
//! `±HH:MM`, `±HHMM` or `±HH`. Timestamps without an offset are read as UTC.
//! Fractions are truncated to microseconds. Year 0 and leap seconds are
//! rejected.
//!
//! Millisecond conversion goes through floating-point seconds
//! (`micros / 1e6 * 1000`, truncated), so a handful of instants land one
//! millisecond below their exact value. Downstream consumers already key on
//! those values, so the artifact is kept.

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc};
use serde_json::Value;

use crate::error::{json_kind, NormalizeError, Result};

const DATE_LEN: usize = "YYYY-MM-DD".len();

/// Clock layouts, longest first. The flag marks the hour-only form, whose
/// minute defaults to zero.
const CLOCK_FORMATS: &[(&str, bool)] = &[("%H:%M:%S%.f", false), ("%H:%M", false), ("%H", true)];

/// Parse an ISO-8601 timestamp into an offset-aware instant.
pub fn parse_iso8601(input: &str) -> Result<DateTime<FixedOffset>> {
    let malformed = |reason: String| NormalizeError::MalformedTimestamp {
        value: Value::from(input).to_string(),
        reason,
    };

    let (text, zulu) = match input.strip_suffix('Z') {
        Some(rest) => (rest, true),
        None => (input, false),
    };

    if text.len() < DATE_LEN || !text.is_char_boundary(DATE_LEN) {
        return Err(malformed("expected a YYYY-MM-DD date".to_string()));
    }
    let (date_part, rest) = text.split_at(DATE_LEN);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| malformed(format!("invalid date: {e}")))?;
    if date.year() == 0 {
        return Err(malformed("year 0 is out of range".to_string()));
    }

    let (time, offset) = if rest.is_empty() {
        (NaiveTime::MIN, Utc.fix())
    } else {
        let rest = rest
            .strip_prefix(|c: char| c == 'T' || c == ' ')
            .ok_or_else(|| malformed("expected 'T' or ' ' between date and time".to_string()))?;
        let (time, tail) = parse_clock(rest).map_err(malformed)?;
        let offset = match (zulu, tail) {
            (_, "") => Utc.fix(),
            (false, tail) => parse_offset(tail).map_err(malformed)?,
            (true, tail) => return Err(malformed(format!("unexpected {tail:?} before 'Z'"))),
        };
        (time, offset)
    };

    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
        .ok_or_else(|| malformed("instant is out of range".to_string()))
}

/// Epoch milliseconds of `instant`, via floating-point seconds.
pub fn epoch_millis<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    let seconds = instant.timestamp_micros() as f64 / 1_000_000.0;
    (seconds * 1000.0) as i64
}

/// Read a raw `timestamp` field and convert it to epoch milliseconds.
pub(crate) fn millis_from_field(field: Option<&Value>) -> Result<i64> {
    match field {
        Some(Value::String(text)) => parse_iso8601(text).map(|instant| epoch_millis(&instant)),
        None => Err(NormalizeError::MalformedTimestamp {
            value: "<missing>".to_string(),
            reason: "timestamp is missing".to_string(),
        }),
        Some(other) => Err(NormalizeError::MalformedTimestamp {
            value: other.to_string(),
            reason: format!("expected an ISO-8601 string, found {}", json_kind(other)),
        }),
    }
}

/// Parse the time of day at the start of `text`, returning it with whatever
/// follows (the offset, if any).
fn parse_clock(text: &str) -> std::result::Result<(NaiveTime, &str), String> {
    let (time, tail) = CLOCK_FORMATS
        .iter()
        .find_map(|&(fmt, hour_only)| {
            let mut parsed = Parsed::new();
            let tail = format::parse_and_remainder(&mut parsed, text, StrftimeItems::new(fmt)).ok()?;
            if hour_only {
                parsed.set_minute(0).ok()?;
            }
            Some((parsed.to_naive_time().ok()?, tail))
        })
        .ok_or_else(|| format!("invalid time of day {text:?}"))?;

    // `%S` admits 60 and chrono stores it as a nanosecond overflow.
    if time.nanosecond() >= 1_000_000_000 {
        return Err("second must be in 0..59".to_string());
    }
    Ok((time, tail))
}

fn parse_offset(text: &str) -> std::result::Result<FixedOffset, String> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new("%#z"))
        .and_then(|()| parsed.to_fixed_offset())
        .map_err(|e| format!("invalid UTC offset {text:?}: {e}"))
}
