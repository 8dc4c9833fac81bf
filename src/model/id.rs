use std::fmt::{self, Display, Formatter};

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A unique identifier for a stored record.
///
/// Identifiers follow the `<kind>-<millis>` convention used throughout the
/// stored collections, with a random suffix appended so that two records
/// created within the same millisecond still get distinct ids.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Generate a fresh identifier for a record of the given kind,
    /// e.g. `vote-1715198400000-9f3ab21c`.
    pub fn generate(kind: &str) -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen();
        Self(format!("{kind}-{millis}-{suffix:08x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Id {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Id {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
