use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset-less date-times are read as local wall time.
const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One countdown record as stored by the remote spreadsheet.
///
/// `target_date` keeps the text exactly as typed or as returned by the
/// store; it is only interpreted when a countdown is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownEntry {
    #[serde(deserialize_with = "cell_text")]
    pub title: String,
    #[serde(rename = "targetDate", deserialize_with = "cell_text")]
    pub target_date: String,
}

/// Spreadsheet cells come back as strings, numbers or booleans; keep them all as text.
fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct CellTextVisitor;

    impl Visitor<'_> for CellTextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(CellTextVisitor)
}

impl CountdownEntry {
    pub fn new(title: impl Into<String>, target_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target_date: target_date.into(),
        }
    }

    pub fn target(&self) -> Option<DateTime<Utc>> {
        parse_target_date(&self.target_date)
    }
}

/// Interpret a stored target date.
///
/// RFC 3339 values keep their offset, a bare date is midnight UTC and a
/// date-time without offset is local time. Anything else is `None`.
pub fn parse_target_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }

    LOCAL_DATE_TIME_FORMATS.iter().find_map(|format| {
        let naive = NaiveDateTime::parse_from_str(text, format).ok()?;
        resolve_local(naive, |naive| {
            Local
                .from_local_datetime(naive)
                .map(|local| local.with_timezone(&Utc))
        })
    })
}

/// Pin a wall-clock time to an instant.
///
/// Repeated times take the earlier instant. Times skipped by a forward
/// clock change move one hour later, as browsers do.
fn resolve_local<F>(naive: NaiveDateTime, to_utc: F) -> Option<DateTime<Utc>>
where
    F: Fn(&NaiveDateTime) -> LocalResult<DateTime<Utc>>,
{
    match to_utc(&naive) {
        LocalResult::None => to_utc(&(naive + Duration::hours(1))).earliest(),
        resolved => resolved.earliest(),
    }
}
