use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::model::{Candidate, Election, Session, Vote, Voter};

use super::Store;

/// A type whose records live in a named collection within the store.
pub trait Collection {
    /// The storage key of the collection.
    const KEY: &'static str;
}

/// A type held as a single object under a named key within the store.
pub trait SlotValue {
    /// The storage key of the slot.
    const KEY: &'static str;
}

/// A typed handle on a whole-collection key in the store.
///
/// Reads and writes always cover the entire collection; there are no
/// partial updates or transactions at this layer, so every mutation is a
/// load-modify-save of the full array.
pub struct Coll<'s, T> {
    store: &'s dyn Store,
    _marker: PhantomData<T>,
}

impl<'s, T> Coll<'s, T>
where
    T: Collection + Serialize + DeserializeOwned,
{
    /// Get a handle on this collection in the given store.
    pub fn from_store(store: &'s dyn Store) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Read the entire collection. An absent key is an empty collection.
    pub fn load(&self) -> Result<Vec<T>> {
        match self.store.read(T::KEY) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the entire collection.
    pub fn save(&self, items: &[T]) -> Result<()> {
        self.store.write(T::KEY, serde_json::to_string(items)?);
        Ok(())
    }
}

// `derive(Clone)` would only derive if `T: Clone`, but we don't need that bound.
impl<T> Clone for Coll<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            _marker: PhantomData,
        }
    }
}

/// A typed handle on a single-object key in the store.
pub struct Slot<'s, T> {
    store: &'s dyn Store,
    _marker: PhantomData<T>,
}

impl<'s, T> Slot<'s, T>
where
    T: SlotValue + Serialize + DeserializeOwned,
{
    /// Get a handle on this slot in the given store.
    pub fn from_store(store: &'s dyn Store) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Read the stored object, if the slot is occupied.
    pub fn load(&self) -> Result<Option<T>> {
        match self.store.read(T::KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored object.
    pub fn save(&self, value: &T) -> Result<()> {
        self.store.write(T::KEY, serde_json::to_string(value)?);
        Ok(())
    }

    /// Empty the slot.
    pub fn clear(&self) {
        self.store.remove(T::KEY);
    }
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            _marker: PhantomData,
        }
    }
}

// Election collection.
const ELECTIONS: &str = "elections";
impl Collection for Election {
    const KEY: &'static str = ELECTIONS;
}

// Candidate collection.
const CANDIDATES: &str = "candidates";
impl Collection for Candidate {
    const KEY: &'static str = CANDIDATES;
}

// Voter collection.
const REGISTERED_VOTERS: &str = "registeredVoters";
impl Collection for Voter {
    const KEY: &'static str = REGISTERED_VOTERS;
}

// Vote collection.
const VOTES: &str = "votes";
impl Collection for Vote {
    const KEY: &'static str = VOTES;
}

// Current session slot.
const CURRENT_USER: &str = "currentUser";
impl SlotValue for Session {
    const KEY: &'static str = CURRENT_USER;
}

/// Administrator session flag, stored as the string `"true"` when an
/// administrator is logged in. Accessed directly on the [`Store`] rather
/// than through a typed handle.
pub const ADMIN_AUTH: &str = "adminAuth";
