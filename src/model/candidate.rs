use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::model::Id;

/// A person standing for a position within one election, as stored in the
/// `candidates` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Id,
    pub name: String,
    pub position: String,
    pub party: String,
    pub slogan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Owning election. Not enforced by the store; deleting an election
    /// leaves its candidates behind.
    pub election_id: Id,
}

/// A candidate specification, as submitted by an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSpec {
    pub name: String,
    pub position: String,
    pub party: String,
    pub slogan: String,
    pub image_url: Option<String>,
    pub election_id: Id,
}

impl CandidateSpec {
    /// Validate the form input, collecting per-field errors.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().chars().count() < 3 {
            errors.add("name", "Name must be at least 3 characters");
        }
        if self.position.trim().chars().count() < 3 {
            errors.add("position", "Position must be at least 3 characters");
        }
        if self.party.trim().chars().count() < 2 {
            errors.add("party", "Party must be at least 2 characters");
        }
        if self.slogan.trim().chars().count() < 5 {
            errors.add("slogan", "Slogan must be at least 5 characters");
        }
        if self.election_id.as_str().is_empty() {
            errors.add("electionId", "Election must be selected");
        }
        errors.into_result()
    }

    /// Build the stored record with a fresh identifier.
    pub(crate) fn into_candidate(self) -> Candidate {
        Candidate {
            id: Id::generate("candidate"),
            name: self.name,
            position: self.position,
            party: self.party,
            slogan: self.slogan,
            image_url: self.image_url,
            election_id: self.election_id,
        }
    }
}
