mod candidate;
mod election;
mod id;
mod tally;
mod vote;
mod voter;

pub use candidate::{Candidate, CandidateSpec};
pub use election::{Election, ElectionSpec, ElectionStatus};
pub use id::Id;
pub use tally::{tally, CandidateTally, ElectionResults};
pub use vote::Vote;
pub use voter::{Registration, Session, Voter};

#[cfg(test)]
pub(crate) use election::example_now;
