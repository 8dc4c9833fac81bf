use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Candidate, Election, Id, Vote};

/// Aggregated vote count and share for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTally {
    pub candidate_id: Id,
    pub count: usize,
    /// Share of the election's total vote, rounded to the nearest whole
    /// percent. Zero when the election has no votes at all.
    pub percentage: u32,
}

/// The tallied results of one election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionResults {
    pub election: Election,
    pub total_votes: usize,
    pub tallies: Vec<CandidateTally>,
}

/// Compute per-candidate counts and percentages for one election.
///
/// `candidates` and `votes` are the election's own candidate and vote
/// sets. Every known candidate appears in the result, zero-count ones
/// included. Votes referencing an unknown candidate (one deleted after
/// votes were cast) are not counted for anyone, but they do remain in the
/// percentage denominator. Results are sorted by descending count, with
/// equal counts ordered by candidate id.
pub fn tally(candidates: &[Candidate], votes: &[Vote]) -> Vec<CandidateTally> {
    // Zero-initialise so candidates with no votes appear with 0%.
    let mut counts: Vec<(Id, usize)> = candidates
        .iter()
        .map(|candidate| (candidate.id.clone(), 0))
        .collect();

    let total = votes.len();
    for vote in votes {
        match counts.iter_mut().find(|(id, _)| *id == vote.candidate_id) {
            Some(entry) => entry.1 += 1,
            None => debug!(
                "Vote {} references unknown candidate {}, not counting it",
                vote.id, vote.candidate_id
            ),
        }
    }

    let mut tallies: Vec<CandidateTally> = counts
        .into_iter()
        .map(|(candidate_id, count)| CandidateTally {
            candidate_id,
            count,
            percentage: share(count, total),
        })
        .collect();
    tallies.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });
    tallies
}

/// `round(count / total * 100)`, with an empty election defined as 0%.
fn share(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
