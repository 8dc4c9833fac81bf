use std::cell::RefCell;
use std::collections::HashMap;

use super::Store;

/// An in-memory [`Store`], standing in for the browser storage the
/// platform runs on. Nothing is durable: dropping the store drops every
/// collection with it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: String) {
        self.items.borrow_mut().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
