use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::model::{Candidate, Election, Id, Voter};
use crate::store::{Coll, Store};

/// Look up an election by id, with its status snapshot re-derived at `now`.
pub(super) fn election_by_id(
    store: &dyn Store,
    election_id: &Id,
    now: DateTime<Utc>,
) -> Result<Election> {
    let mut election = Coll::<Election>::from_store(store)
        .load()?
        .into_iter()
        .find(|election| election.id == *election_id)
        .ok_or_else(|| Error::not_found(format!("Election with ID '{election_id}'")))?;
    election.refresh_status(now);
    Ok(election)
}

/// Look up a voter by id.
pub(super) fn voter_by_id(store: &dyn Store, voter_id: &Id) -> Result<Voter> {
    Coll::<Voter>::from_store(store)
        .load()?
        .into_iter()
        .find(|voter| voter.id == *voter_id)
        .ok_or_else(|| Error::not_found(format!("Voter with ID '{voter_id}'")))
}

/// Look up a candidate by id.
pub(super) fn candidate_by_id(store: &dyn Store, candidate_id: &Id) -> Result<Candidate> {
    Coll::<Candidate>::from_store(store)
        .load()?
        .into_iter()
        .find(|candidate| candidate.id == *candidate_id)
        .ok_or_else(|| Error::not_found(format!("Candidate with ID '{candidate_id}'")))
}

/// Case-insensitive containment match used by the search operations.
pub(super) fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
