use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A permission scope granted or denied as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ReadSleep,
    ReadHeartRate,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ReadSleep => "read_sleep",
            Capability::ReadHeartRate => "read_heart_rate",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability -> granted map as returned by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionGrants {
    pub grants: HashMap<Capability, bool>,
}

impl PermissionGrants {
    /// True only when every required capability is present and granted.
    /// A capability the provider did not answer for counts as denied.
    pub fn all_granted(&self, required: &[Capability]) -> bool {
        required
            .iter()
            .all(|capability| self.grants.get(capability).copied().unwrap_or(false))
    }

    pub fn denied(&self, required: &[Capability]) -> Vec<Capability> {
        required
            .iter()
            .filter(|capability| !self.grants.get(capability).copied().unwrap_or(false))
            .copied()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Sleep,
    HeartRate,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Sleep => "sleep",
            RecordKind::HeartRate => "heart_rate",
        }
    }
}

/// Half-open query window, both bounds in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// [today - days at 00:00, today at 00:00].
    pub fn trailing_days(days: i64) -> Self {
        Self::trailing_days_from(Local::now().date_naive(), days)
    }

    pub fn trailing_days_from(today: NaiveDate, days: i64) -> Self {
        Self {
            start: (today - Duration::days(days)).and_time(NaiveTime::MIN),
            end: today.and_time(NaiveTime::MIN),
        }
    }
}

/// One externally-owned health observation. Providers may attach more
/// fields; everything beyond the interval is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Outcome of a sleep read; the display form is the reported message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SleepReport {
    First {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    Empty,
}

impl fmt::Display for SleepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleepReport::First { start, end } => write!(
                f,
                "First sleep record: {} to {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            ),
            SleepReport::Empty => f.write_str("No records found"),
        }
    }
}
