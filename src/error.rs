use std::fmt::{self, Display, Formatter};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A stored collection could not be encoded or decoded.
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
    /// Form input failed validation; see the per-field messages.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A business rule refused the operation.
    #[error("{0}")]
    Rejected(#[from] Rejection),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Construct a `NotFound` error for the given resource.
    pub fn not_found(what: impl Display) -> Self {
        Self::NotFound(what.to_string())
    }
}

/// Business-rule rejections. These are user-facing refusals surfaced as
/// transient notifications, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Your account must be verified by an administrator before you can vote")]
    NotVerified,
    #[error("This election is not currently active")]
    ElectionNotActive,
    #[error("You have already voted in this election")]
    AlreadyVoted,
    #[error("An account with this email is already registered")]
    DuplicateEmail,
    #[error("An account with this student ID is already registered")]
    DuplicateStudentId,
    #[error("Invalid credentials")]
    BadCredentials,
}

/// Validation failures for a submitted form, one entry per offending field.
/// Fields are named as they appear in storage, so the UI can attach each
/// message to its input inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

/// A single field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure against the given field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message recorded against the given field, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    /// Convert into a `Result`: `Ok` if no failures were recorded.
    pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
