use chrono::{DateTime, Utc};
use log::info;

use crate::error::{Error, Rejection, Result};
use crate::model::{Candidate, ElectionStatus, Id, Vote};
use crate::store::{Coll, Store};

use super::common;

/// Cast a vote on behalf of a voter.
///
/// Preconditions, checked against the authoritative records rather than
/// the session copy: the voter exists and is verified, the election
/// exists and is active at `now`, the candidate stands in the election,
/// and the voter has not voted in this election before. Failures are
/// user-facing rejections, not faults; the vote collection is only
/// touched on success.
pub fn cast_vote(
    store: &dyn Store,
    voter_id: &Id,
    election_id: &Id,
    candidate_id: &Id,
    now: DateTime<Utc>,
) -> Result<Vote> {
    // The voter must exist and be verified.
    let voter = common::voter_by_id(store, voter_id)?;
    if !voter.verified {
        return Err(Rejection::NotVerified.into());
    }

    // The election must exist and be active right now.
    let election = common::election_by_id(store, election_id, now)?;
    if election.status != ElectionStatus::Active {
        return Err(Rejection::ElectionNotActive.into());
    }

    // The candidate must stand in this election.
    Coll::<Candidate>::from_store(store)
        .load()?
        .into_iter()
        .find(|candidate| {
            candidate.id == *candidate_id && candidate.election_id == *election_id
        })
        .ok_or_else(|| {
            Error::not_found(format!(
                "Candidate with ID '{candidate_id}' in election '{election_id}'"
            ))
        })?;

    // At most one vote per voter per election.
    let votes = Coll::<Vote>::from_store(store);
    let mut all = votes.load()?;
    if all
        .iter()
        .any(|vote| vote.voter_id == *voter_id && vote.election_id == *election_id)
    {
        return Err(Rejection::AlreadyVoted.into());
    }

    let vote = Vote::new(
        voter_id.clone(),
        election_id.clone(),
        candidate_id.clone(),
        now,
    );
    all.push(vote.clone());
    votes.save(&all)?;
    info!("Voter {voter_id} voted in election {election_id}");
    Ok(vote)
}

/// Whether the voter has already cast a vote in the given election.
pub fn has_voted(store: &dyn Store, voter_id: &Id, election_id: &Id) -> Result<bool> {
    let votes = Coll::<Vote>::from_store(store).load()?;
    Ok(votes
        .iter()
        .any(|vote| vote.voter_id == *voter_id && vote.election_id == *election_id))
}
