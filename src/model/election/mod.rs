mod status;

pub use status::ElectionStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::model::Id;

/// A time-boxed voting event, as stored in the `elections` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Lifecycle status as of the last read. A derived snapshot, never
    /// authoritative; see [`ElectionStatus`].
    pub status: ElectionStatus,
    /// Denormalised count of candidates standing in this election, kept
    /// in step by the candidate operations.
    pub candidate_count: u32,
}

impl Election {
    /// Derive the lifecycle status from the stored time window.
    pub fn status_at(&self, now: DateTime<Utc>) -> ElectionStatus {
        ElectionStatus::derive(self.start_date, self.end_date, now)
    }

    /// Re-derive the stored status snapshot against the given time.
    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        self.status = self.status_at(now);
    }
}

/// An election specification, as submitted by an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSpec {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl ElectionSpec {
    /// Validate the form input, collecting per-field errors.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.title.trim().chars().count() < 5 {
            errors.add("title", "Title must be at least 5 characters");
        }
        if self.description.trim().chars().count() < 20 {
            errors.add("description", "Description must be at least 20 characters");
        }
        if self.end_date <= self.start_date {
            errors.add("endDate", "End date must be after start date");
        }
        errors.into_result()
    }

    /// Build the stored record, deriving the initial status at `now`.
    pub(crate) fn into_election(self, now: DateTime<Utc>) -> Election {
        let status = ElectionStatus::derive(self.start_date, self.end_date, now);
        Election {
            id: Id::generate("election"),
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status,
            candidate_count: 0,
        }
    }
}


#[cfg(test)]
pub(crate) use examples::example_now;
