//! The platform's operation surface: plain functions over a [`Store`],
//! grouped the way users encounter them.
//!
//! [`Store`]: crate::store::Store

pub mod admin;
pub mod auth;
pub mod public;
pub mod voting;

mod common;
