use serde::{Deserialize, Serialize};

use crate::model::Id;

/// The currently authenticated voter's public profile, as stored in the
/// `currentUser` slot.
///
/// This duplicates fields from the [`Voter`](super::Voter) record and is
/// not an independent source of truth: in particular the `verified` flag
/// can go stale if an administrator changes it mid-session. Eligibility
/// checks must consult the voter record instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub verified: bool,
}
