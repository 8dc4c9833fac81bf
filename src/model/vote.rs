use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Id;

/// An immutable record linking one voter to one candidate within one
/// election, as stored in the `votes` collection. Votes are appended once
/// and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: Id,
    /// Stored as `userId`, the field name the collections have always used.
    #[serde(rename = "userId")]
    pub voter_id: Id,
    pub election_id: Id,
    pub candidate_id: Id,
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    /// Create a vote record with a fresh identifier, timestamped `now`.
    pub fn new(voter_id: Id, election_id: Id, candidate_id: Id, now: DateTime<Utc>) -> Self {
        Self {
            id: Id::generate("vote"),
            voter_id,
            election_id,
            candidate_id,
            timestamp: now,
        }
    }
}
