//! Storage and domain core for the VoteSphere student election platform.
//!
//! Everything lives in a local [`store::Store`]: a directory of named,
//! JSON-encoded collections with whole-collection reads and writes. The
//! [`api`] modules implement the user-facing operations over it —
//! registration and sessions, election and candidate administration, vote
//! casting, and tallying. There is no server and no durable persistence;
//! each embedder holds its own isolated copy of every collection.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::Config;
pub use error::{Error, Rejection, Result, ValidationErrors};
