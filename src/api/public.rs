use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{tally, Candidate, Election, ElectionResults, ElectionStatus, Id, Vote};
use crate::store::{Coll, Store};

use super::common;

/// All elections, each with its status snapshot re-derived at `now`.
/// Reads never write the refreshed statuses back.
pub fn list_elections(store: &dyn Store, now: DateTime<Utc>) -> Result<Vec<Election>> {
    let mut elections = Coll::<Election>::from_store(store).load()?;
    for election in &mut elections {
        election.refresh_status(now);
    }
    Ok(elections)
}

/// The elections currently in the given lifecycle state.
pub fn elections_with_status(
    store: &dyn Store,
    status: ElectionStatus,
    now: DateTime<Utc>,
) -> Result<Vec<Election>> {
    let mut elections = list_elections(store, now)?;
    elections.retain(|election| election.status == status);
    Ok(elections)
}

/// Elections whose title or description contains the search term
/// (case-insensitive). An empty term matches everything.
pub fn search_elections(
    store: &dyn Store,
    term: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Election>> {
    let term = term.trim().to_lowercase();
    let mut elections = list_elections(store, now)?;
    elections.retain(|election| {
        common::matches(&election.title, &term) || common::matches(&election.description, &term)
    });
    Ok(elections)
}

/// Look up a single election, status derived at `now`.
pub fn election(store: &dyn Store, election_id: &Id, now: DateTime<Utc>) -> Result<Election> {
    common::election_by_id(store, election_id, now)
}

/// Look up a single candidate.
pub fn candidate(store: &dyn Store, candidate_id: &Id) -> Result<Candidate> {
    common::candidate_by_id(store, candidate_id)
}

/// The candidates standing in the given election.
pub fn election_candidates(store: &dyn Store, election_id: &Id) -> Result<Vec<Candidate>> {
    let mut candidates = Coll::<Candidate>::from_store(store).load()?;
    candidates.retain(|candidate| candidate.election_id == *election_id);
    Ok(candidates)
}

/// Tally the results of an election: per-candidate counts and
/// percentages, sorted descending.
pub fn election_results(
    store: &dyn Store,
    election_id: &Id,
    now: DateTime<Utc>,
) -> Result<ElectionResults> {
    let election = common::election_by_id(store, election_id, now)?;
    let candidates = election_candidates(store, election_id)?;

    let mut votes = Coll::<Vote>::from_store(store).load()?;
    votes.retain(|vote| vote.election_id == *election_id);

    let tallies = tally(&candidates, &votes);
    Ok(ElectionResults {
        election,
        total_votes: votes.len(),
        tallies,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::api::admin::{add_candidate, create_election, verify_voter};
    use crate::api::auth::register;
    use crate::api::voting::cast_vote;
    use crate::error::Error;
    use crate::model::{example_now, CandidateSpec, ElectionSpec, Registration};
    use crate::store::MemoryStore;

    use super::*;

    fn seeded_store() -> (MemoryStore, Election) {
        let store = MemoryStore::new();
        let election = create_election(&store, ElectionSpec::example(), example_now()).unwrap();
        create_election(
            &store,
            ElectionSpec {
                title: "Department Representative Election".to_string(),
                description: "Choose your department representatives who will voice \
                              your concerns to the faculty."
                    .to_string(),
                start_date: example_now() + Duration::days(8),
                end_date: example_now() + Duration::days(13),
            },
            example_now(),
        )
        .unwrap();
        (store, election)
    }

    #[test]
    fn listing_rederives_statuses() {
        let (store, election) = seeded_store();

        // Read the same records after the first window has closed.
        let later = election.end_date + Duration::days(1);
        let elections = list_elections(&store, later).unwrap();
        assert_eq!(elections[0].status, ElectionStatus::Completed);

        // The stored snapshot is untouched by reads.
        let stored = Coll::<Election>::from_store(&store).load().unwrap();
        assert_eq!(stored[0].status, ElectionStatus::Active);
    }

    #[test]
    fn filtering_by_status() {
        let (store, _) = seeded_store();
        let active = elections_with_status(&store, ElectionStatus::Active, example_now()).unwrap();
        let upcoming =
            elections_with_status(&store, ElectionStatus::Upcoming, example_now()).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(active[0].title, "Student Council Elections");
    }

    #[test]
    fn searching_titles_and_descriptions() {
        let (store, _) = seeded_store();
        assert_eq!(search_elections(&store, "council", example_now()).unwrap().len(), 1);
        assert_eq!(search_elections(&store, "FACULTY", example_now()).unwrap().len(), 1);
        assert_eq!(search_elections(&store, "", example_now()).unwrap().len(), 2);
        assert!(search_elections(&store, "sports", example_now()).unwrap().is_empty());
    }

    #[test]
    fn missing_election_is_not_found() {
        let store = MemoryStore::new();
        let err = election(&store, &Id::from("election-missing"), example_now()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        let err =
            election_results(&store, &Id::from("election-missing"), example_now()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn candidate_lookup() {
        let (store, election) = seeded_store();
        let candidate = add_candidate(&store, CandidateSpec::example(election.id.clone())).unwrap();
        assert_eq!(super::candidate(&store, &candidate.id).unwrap(), candidate);
        assert!(super::candidate(&store, &Id::from("candidate-missing")).is_err());
    }

    #[test]
    fn results_for_a_three_to_one_election() {
        let (store, election) = seeded_store();
        let c1 = add_candidate(&store, CandidateSpec::example(election.id.clone())).unwrap();
        let c2 = add_candidate(&store, CandidateSpec::example2(election.id.clone())).unwrap();

        let registrations = [
            Registration::example(),
            Registration::example2(),
            Registration {
                name: "Casey Nguyen".to_string(),
                email: "casey.nguyen@university.edu".to_string(),
                student_id: "S24680".to_string(),
                password: "perfectly fine".to_string(),
            },
            Registration {
                name: "Dana Okafor".to_string(),
                email: "dana.okafor@university.edu".to_string(),
                student_id: "S13579".to_string(),
                password: "also acceptable".to_string(),
            },
        ];
        let mut choices = [&c1, &c1, &c1, &c2].into_iter();
        for registration in registrations {
            let voter = register(&store, registration).unwrap();
            verify_voter(&store, &voter.id).unwrap();
            let choice = choices.next().unwrap();
            cast_vote(&store, &voter.id, &election.id, &choice.id, example_now()).unwrap();
        }

        let results = election_results(&store, &election.id, example_now()).unwrap();
        assert_eq!(results.total_votes, 4);
        assert_eq!(results.tallies.len(), 2);
        assert_eq!(results.tallies[0].candidate_id, c1.id);
        assert_eq!(results.tallies[0].count, 3);
        assert_eq!(results.tallies[0].percentage, 75);
        assert_eq!(results.tallies[1].candidate_id, c2.id);
        assert_eq!(results.tallies[1].count, 1);
        assert_eq!(results.tallies[1].percentage, 25);
    }

    #[test]
    fn results_ignore_other_elections_votes() {
        let (store, election) = seeded_store();
        let candidate = add_candidate(&store, CandidateSpec::example(election.id.clone())).unwrap();

        let voter = register(&store, Registration::example()).unwrap();
        verify_voter(&store, &voter.id).unwrap();
        cast_vote(&store, &voter.id, &election.id, &candidate.id, example_now()).unwrap();

        let results = election_results(&store, &election.id, example_now()).unwrap();
        assert_eq!(results.total_votes, 1);

        // The other election has no candidates and no votes.
        let other = list_elections(&store, example_now())
            .unwrap()
            .into_iter()
            .find(|e| e.id != election.id)
            .unwrap();
        let other_results = election_results(&store, &other.id, example_now()).unwrap();
        assert_eq!(other_results.total_votes, 0);
        assert!(other_results.tallies.is_empty());
    }
}
