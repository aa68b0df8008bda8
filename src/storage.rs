use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A persistent key-value backend that remembers group assignments.
///
/// The backend is owned by the application, not by this crate, and is
/// typically shared between every test and whatever else the application
/// persists. Methods take `&self` so a shared reference is enough to read
/// and write through; implementations that mutate need interior
/// mutability.
///
/// A test stores a single integer under its name: `0` for a user outside
/// the experiment, or the drawn group label. Clearing that key externally
/// makes the next `user_group` read re-resolve from scratch.
pub trait Storage {
    /// Returns the value previously stored under `key`, if any.
    fn get(&self, key: &str) -> Option<u32>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: u32);

    /// Best-effort durability hint, called after the write that first
    /// establishes an involved user's group.
    fn flush(&self);
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Option<u32> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: u32) {
        (**self).set(key, value)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Option<u32> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: u32) {
        (**self).set(key, value)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/// In-process [`Storage`] backed by a `HashMap`.
///
/// Assignments live only as long as the value itself, which makes this
/// backend suited to tests, examples, and single-run tools; applications
/// that need assignments to survive restarts plug in whatever actually
/// persists for them.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, u32>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the entry stored under `key`, if any.
    pub fn remove(&self, key: &str) {
        self.entries().remove(key);
    }

    /// Number of stored assignments.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, u32>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<u32> {
        self.entries().get(key).copied()
    }

    fn set(&self, key: &str, value: u32) {
        self.entries().insert(key.to_owned(), value);
    }

    fn flush(&self) {}
}
