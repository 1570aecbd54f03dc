use serde::Deserialize;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, Duration,
    OffsetDateTime, UtcOffset,
};

/// Raw `date` value as clients send it: a string literal or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Millis(i64),
    Text(String),
}

impl DateInput {
    pub fn to_instant(&self) -> Result<OffsetDateTime, String> {
        match self {
            DateInput::Millis(ms) => from_millis(*ms),
            DateInput::Text(s) => parse_instant(s),
        }
    }
}

/// Normalizes an RFC 3339 instant, an ISO `YYYY-MM-DD` date or a `DD/MM/YYYY`
/// literal to a UTC instant. Bare dates resolve to midnight UTC.
///
/// Sub-microsecond digits are dropped, matching what `TIMESTAMPTZ` keeps.
pub fn parse_instant(raw: &str) -> Result<OffsetDateTime, String> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(truncate_to_micros(dt.to_offset(UtcOffset::UTC)));
    }
    let date = Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .or_else(|_| {
            Date::parse(
                raw,
                format_description!("[day padding:none]/[month padding:none]/[year]"),
            )
        })
        .map_err(|_| format!("date '{raw}' is not a valid date"))?;
    Ok(date.midnight().assume_utc())
}

fn truncate_to_micros(dt: OffsetDateTime) -> OffsetDateTime {
    dt - Duration::nanoseconds(i64::from(dt.nanosecond() % 1_000))
}

fn from_millis(ms: i64) -> Result<OffsetDateTime, String> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .map_err(|_| format!("date {ms} is out of range"))
}
