use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// States in the election lifecycle.
///
/// Status is derived from the clock on every read rather than stored
/// authoritatively, so two reads at different times may disagree. Callers
/// must not cache a status across time-sensitive checks such as vote
/// eligibility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    /// The start time is still in the future.
    Upcoming,
    /// Voting is open.
    Active,
    /// The end time has passed.
    Completed,
}

impl ElectionStatus {
    /// Derive the status of an election from its time window:
    /// `Completed` if `now` is past the end, `Active` while
    /// `start <= now <= end`, `Upcoming` before the start.
    pub fn derive(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now > end {
            Self::Completed
        } else if now >= start {
            Self::Active
        } else {
            Self::Upcoming
        }
    }
}

impl Display for ElectionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}
