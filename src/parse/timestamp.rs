//! Timezone-aware parsing of the dates embedded in notices.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::TimestampSource;

/// Source of "now" for the fallback branch.
pub(crate) type Clock = fn() -> DateTime<Utc>;

/// Date layouts used by the known notice shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateFormat {
    /// `07-AUG-25 10:02:47 PM`
    DayMonthNameYear,
    /// `07-Aug-25 06:38:41 PM BST`; the zone marker is dropped before parsing.
    DayMonthNameYearZoned,
    /// `07/08/2025 17:36`
    DayMonthYearNumeric,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            Self::DayMonthNameYear | Self::DayMonthNameYearZoned => "%d-%b-%y %I:%M:%S %p",
            Self::DayMonthYearNumeric => "%d/%m/%Y %H:%M",
        }
    }
}

/// Parse `text` as local time in `tz`.
pub(crate) fn parse_local(text: &str, format: DateFormat, tz: Tz) -> Result<DateTime<Tz>> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = match format {
        DateFormat::DayMonthNameYearZoned => strip_zone_marker(&normalized),
        _ => normalized.as_str(),
    };

    let naive = NaiveDateTime::parse_from_str(cleaned, format.pattern())
        .map_err(|e| anyhow::anyhow!("Could not parse date '{text}': {e}"))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| anyhow::anyhow!("Local time {naive} does not exist in {tz}"))
}

/// Parse the embedded date, substituting the current time in `tz` when it
/// cannot be parsed.
pub(crate) fn resolve(
    text: &str,
    format: DateFormat,
    tz: Tz,
    clock: Clock,
) -> (DateTime<Tz>, TimestampSource) {
    match parse_local(text, format, tz) {
        Ok(dt) => (dt, TimestampSource::Message),
        Err(e) => {
            tracing::warn!(error = %e, "using current time for unparseable notice date");
            (clock().with_timezone(&tz), TimestampSource::Fallback)
        }
    }
}

/// Drop a trailing zone abbreviation such as `BST`, keeping `AM`/`PM`.
fn strip_zone_marker(s: &str) -> &str {
    match s.rsplit_once(' ') {
        Some((head, last))
            if last.chars().all(|c| c.is_ascii_alphabetic())
                && !last.eq_ignore_ascii_case("am")
                && !last.eq_ignore_ascii_case("pm") =>
        {
            head
        }
        _ => s,
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
