mod session;

pub use session::Session;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::model::Id;

/// A registered voter account, as stored in the `registeredVoters`
/// collection.
///
/// The password is held in plaintext; this storage model has no hashing
/// and the credential check is a straight comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub password: String,
    /// Set by an administrator. Voting is refused until this is true.
    pub verified: bool,
}

impl Voter {
    /// Check whether the given password is correct.
    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// The voter's public profile, as held in the `currentUser` slot
    /// while they are logged in.
    pub fn profile(&self) -> Session {
        Session {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            student_id: self.student_id.clone(),
            verified: self.verified,
        }
    }
}

/// A self-registration request, as submitted from the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub password: String,
}

impl Registration {
    /// Validate the form input, collecting per-field errors.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().chars().count() < 3 {
            errors.add("name", "Name must be at least 3 characters");
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            errors.add("email", "Enter a valid email address");
        }
        if self.student_id.trim().is_empty() {
            errors.add("studentId", "Student ID is required");
        }
        if self.password.chars().count() < 8 {
            errors.add("password", "Password must be at least 8 characters");
        }
        errors.into_result()
    }

    /// Build the stored account. New accounts start unverified.
    pub(crate) fn into_voter(self) -> Voter {
        Voter {
            id: Id::generate("voter"),
            name: self.name,
            email: self.email,
            student_id: self.student_id,
            password: self.password,
            verified: false,
        }
    }
}
