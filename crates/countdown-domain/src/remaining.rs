use chrono::{DateTime, Utc};
use std::fmt;

const MS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

pub const COMPLETED_LABEL: &str = "Time's up!";
pub const PENDING_LABEL: &str = "Calculating...";
pub const INVALID_DATE_LABEL: &str = "Invalid date";

/// Time left before a target, split into whole units.
///
/// Sub-second remainders are dropped, never rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// `None` once the target has been reached.
    pub fn from_millis(millis: i64) -> Option<Self> {
        if millis <= 0 {
            return None;
        }

        let total_seconds = millis / MS_PER_SECOND;
        Some(Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        })
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Text shown in the time column of a countdown row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownLabel {
    /// Rendered but not ticked yet
    Pending,
    Remaining(Remaining),
    Completed,
    InvalidDate,
}

impl CountdownLabel {
    pub fn compute(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(target) = target else {
            return Self::InvalidDate;
        };

        match Remaining::from_millis((target - now).num_milliseconds()) {
            Some(remaining) => Self::Remaining(remaining),
            None => Self::Completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for CountdownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str(PENDING_LABEL),
            Self::Remaining(remaining) => write!(f, "{remaining}"),
            Self::Completed => f.write_str(COMPLETED_LABEL),
            Self::InvalidDate => f.write_str(INVALID_DATE_LABEL),
        }
    }
}
