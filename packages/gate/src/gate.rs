use crate::Locker;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Whether the gate currently holds its lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GateState {
    Unlocked,
    Locked,
}

/// Call issued by the gate in reaction to a validity update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    Acquired,
    Released,
}

/// Publishing lock holder for one widget instance
///
/// Starts unlocked. Releases its lock when torn down or dropped, so an
/// instance that goes away can never leave the document blocked.
pub struct SaveGate {
    name: String,
    state: GateState,
    locker: Arc<dyn Locker>,
}

impl SaveGate {
    pub fn new(name: impl Into<String>, locker: Arc<dyn Locker>) -> Self {
        Self {
            name: name.into(),
            state: GateState::Unlocked,
            locker,
        }
    }

    /// Lock name this gate acquires and releases
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    /// React to a freshly computed validity
    ///
    /// Returns the call issued, or `None` when the state already matches.
    pub fn observe(&mut self, is_valid: bool) -> Option<GateTransition> {
        match (self.state, is_valid) {
            (GateState::Unlocked, false) => {
                self.locker.lock(&self.name);
                self.state = GateState::Locked;
                info!(lock = %self.name, "publishing locked");
                Some(GateTransition::Acquired)
            }
            (GateState::Locked, true) => {
                self.locker.unlock(&self.name);
                self.state = GateState::Unlocked;
                info!(lock = %self.name, "publishing unlocked");
                Some(GateTransition::Released)
            }
            _ => None,
        }
    }

    /// Release unconditionally and consume the gate
    pub fn teardown(self) {
        // Drop issues the release
    }

    fn release(&mut self) {
        self.locker.unlock(&self.name);
        debug!(lock = %self.name, was = ?self.state, "save gate torn down");
        self.state = GateState::Unlocked;
    }
}

impl Drop for SaveGate {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for SaveGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveGate")
            .field("name", &self.name)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublishingLocks;
    use std::sync::Mutex;

    /// Records every call in order
    #[derive(Default)]
    struct CallLog(Mutex<Vec<String>>);

    impl CallLog {
        fn calls(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Locker for CallLog {
        fn lock(&self, name: &str) {
            self.0.lock().unwrap().push(format!("lock {}", name));
        }

        fn unlock(&self, name: &str) {
            self.0.lock().unwrap().push(format!("unlock {}", name));
        }
    }

    #[test]
    fn test_repeated_invalid_updates_lock_once() {
        let log = Arc::new(CallLog::default());
        let mut gate = SaveGate::new("required-fields-error:a", log.clone());

        assert_eq!(gate.observe(false), Some(GateTransition::Acquired));
        for _ in 0..9 {
            assert_eq!(gate.observe(false), None);
        }

        assert_eq!(log.calls(), vec!["lock required-fields-error:a"]);
        assert!(gate.is_locked());
    }

    #[test]
    fn test_second_acquire_needs_release_in_between() {
        let log = Arc::new(CallLog::default());
        let mut gate = SaveGate::new("g", log.clone());

        gate.observe(true);
        gate.observe(false);
        gate.observe(true);
        gate.observe(true);
        gate.observe(false);

        assert_eq!(log.calls(), vec!["lock g", "unlock g", "lock g"]);
    }

    #[test]
    fn test_teardown_releases_when_valid() {
        let log = Arc::new(CallLog::default());
        let gate = SaveGate::new("g", log.clone());
        gate.teardown();
        assert_eq!(log.calls(), vec!["unlock g"]);
    }

    #[test]
    fn test_teardown_releases_when_locked() {
        let locks = Arc::new(PublishingLocks::new());
        let mut gate = SaveGate::new("g", locks.clone());
        gate.observe(false);
        assert!(locks.is_locked());

        gate.teardown();
        assert!(!locks.is_locked());
    }

    #[test]
    fn test_drop_releases() {
        let locks = Arc::new(PublishingLocks::new());
        {
            let mut gate = SaveGate::new("g", locks.clone());
            gate.observe(false);
        }
        assert!(!locks.is_locked());
    }

    #[test]
    fn test_gates_do_not_share_locks() {
        let locks = Arc::new(PublishingLocks::new());
        let mut first = SaveGate::new("required-fields-error:1", locks.clone());
        let mut second = SaveGate::new("required-fields-error:2", locks.clone());

        first.observe(false);
        second.observe(false);
        first.observe(true);

        assert!(locks.is_locked());
        assert_eq!(locks.held(), vec!["required-fields-error:2"]);
        drop(second);
        assert!(!locks.is_locked());
        drop(first);
    }
}
