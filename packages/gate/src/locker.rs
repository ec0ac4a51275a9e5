use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

/// Named publishing lock service provided by the host editor
///
/// Both operations must be idempotent: locking a held name or unlocking a
/// free one has no effect.
pub trait Locker: Send + Sync {
    /// Prevent publishing until `name` is unlocked
    fn lock(&self, name: &str);

    /// Release the hold registered under `name`
    fn unlock(&self, name: &str);
}

/// In-memory lock set: publishing is blocked while any name is held
#[derive(Debug, Default)]
pub struct PublishingLocks {
    held: Mutex<BTreeSet<String>>,
}

impl PublishingLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether publishing is currently blocked
    pub fn is_locked(&self) -> bool {
        !self.guard().is_empty()
    }

    pub fn is_held(&self, name: &str) -> bool {
        self.guard().contains(name)
    }

    /// Names currently held, sorted
    pub fn held(&self) -> Vec<String> {
        self.guard().iter().cloned().collect()
    }

    fn guard(&self) -> MutexGuard<'_, BTreeSet<String>> {
        // A poisoned set is still a valid set of names
        self.held.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Locker for PublishingLocks {
    fn lock(&self, name: &str) {
        self.guard().insert(name.to_string());
    }

    fn unlock(&self, name: &str) {
        self.guard().remove(name);
    }
}
