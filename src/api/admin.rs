use chrono::{DateTime, Utc};
use log::info;

use crate::error::{Error, Result};
use crate::model::{Candidate, CandidateSpec, Election, ElectionSpec, Id, Voter};
use crate::store::{Coll, Store};

use super::common;

/// Create a new election from an administrator-submitted spec. The
/// initial status snapshot is derived at `now`.
pub fn create_election(store: &dyn Store, spec: ElectionSpec, now: DateTime<Utc>) -> Result<Election> {
    spec.validate()?;

    let elections = Coll::<Election>::from_store(store);
    let mut all = elections.load()?;
    let election = spec.into_election(now);
    info!("Created election {} \"{}\"", election.id, election.title);
    all.push(election.clone());
    elections.save(&all)?;
    Ok(election)
}

/// Delete an election.
///
/// There is no cascade: candidates and votes referencing the election
/// stay in their collections as orphans.
pub fn delete_election(store: &dyn Store, election_id: &Id) -> Result<()> {
    let elections = Coll::<Election>::from_store(store);
    let mut all = elections.load()?;
    let before = all.len();
    all.retain(|election| election.id != *election_id);
    if all.len() == before {
        return Err(Error::not_found(format!("Election with ID '{election_id}'")));
    }
    elections.save(&all)?;
    info!("Deleted election {election_id}");
    Ok(())
}

/// Add a candidate to an election, keeping the election's denormalised
/// candidate count in step.
pub fn add_candidate(store: &dyn Store, spec: CandidateSpec) -> Result<Candidate> {
    spec.validate()?;

    // The owning election must exist.
    let elections = Coll::<Election>::from_store(store);
    let mut all_elections = elections.load()?;
    let election = all_elections
        .iter_mut()
        .find(|election| election.id == spec.election_id)
        .ok_or_else(|| Error::not_found(format!("Election with ID '{}'", spec.election_id)))?;

    let candidates = Coll::<Candidate>::from_store(store);
    let mut all_candidates = candidates.load()?;
    let candidate = spec.into_candidate();
    all_candidates.push(candidate.clone());
    candidates.save(&all_candidates)?;

    election.candidate_count += 1;
    elections.save(&all_elections)?;
    info!(
        "Added candidate {} ({}) to election {}",
        candidate.id, candidate.name, candidate.election_id
    );
    Ok(candidate)
}

/// Remove a candidate, keeping the owning election's candidate count in
/// step. Votes already cast for the candidate are left in place; the
/// tally skips them from then on.
pub fn remove_candidate(store: &dyn Store, candidate_id: &Id) -> Result<()> {
    let candidates = Coll::<Candidate>::from_store(store);
    let mut all_candidates = candidates.load()?;
    let candidate = all_candidates
        .iter()
        .position(|candidate| candidate.id == *candidate_id)
        .map(|index| all_candidates.remove(index))
        .ok_or_else(|| Error::not_found(format!("Candidate with ID '{candidate_id}'")))?;
    candidates.save(&all_candidates)?;

    // The owning election may itself have been deleted already.
    let elections = Coll::<Election>::from_store(store);
    let mut all_elections = elections.load()?;
    if let Some(election) = all_elections
        .iter_mut()
        .find(|election| election.id == candidate.election_id)
    {
        election.candidate_count = election.candidate_count.saturating_sub(1);
        elections.save(&all_elections)?;
    }
    info!("Removed candidate {candidate_id}");
    Ok(())
}

/// Mark a voter as verified, allowing them to vote.
pub fn verify_voter(store: &dyn Store, voter_id: &Id) -> Result<()> {
    set_verified(store, voter_id, true)
}

/// Revoke a voter's verified status.
pub fn unverify_voter(store: &dyn Store, voter_id: &Id) -> Result<()> {
    set_verified(store, voter_id, false)
}

fn set_verified(store: &dyn Store, voter_id: &Id, verified: bool) -> Result<()> {
    let voters = Coll::<Voter>::from_store(store);
    let mut all = voters.load()?;
    let voter = all
        .iter_mut()
        .find(|voter| voter.id == *voter_id)
        .ok_or_else(|| Error::not_found(format!("Voter with ID '{voter_id}'")))?;
    voter.verified = verified;
    voters.save(&all)?;
    info!("Set voter {voter_id} verified={verified}");
    Ok(())
}

/// Remove a voter account entirely. Votes they have already cast remain.
pub fn delete_voter(store: &dyn Store, voter_id: &Id) -> Result<()> {
    let voters = Coll::<Voter>::from_store(store);
    let mut all = voters.load()?;
    let before = all.len();
    all.retain(|voter| voter.id != *voter_id);
    if all.len() == before {
        return Err(Error::not_found(format!("Voter with ID '{voter_id}'")));
    }
    voters.save(&all)?;
    info!("Deleted voter {voter_id}");
    Ok(())
}

/// All registered voters whose name, email, or student ID contains the
/// search term (case-insensitive). An empty term matches everyone.
pub fn search_voters(store: &dyn Store, term: &str) -> Result<Vec<Voter>> {
    let term = term.trim().to_lowercase();
    let mut voters = Coll::<Voter>::from_store(store).load()?;
    voters.retain(|voter| {
        common::matches(&voter.name, &term)
            || common::matches(&voter.email, &term)
            || common::matches(&voter.student_id, &term)
    });
    Ok(voters)
}
