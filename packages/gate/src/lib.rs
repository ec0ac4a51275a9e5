//! # Blockgate Save Gate
//!
//! Turns a widget's validity into acquire/release calls on a named
//! publishing lock.
//!
//! ```text
//!            invalid                       valid
//! Unlocked ──────────→ Locked   Locked ──────────→ Unlocked
//!   (lock)                        (unlock)
//!
//! teardown / drop: unlock, whatever the state
//! ```
//!
//! The lock service itself is injected as a [`Locker`], never looked up
//! from global state.

mod gate;
mod locker;

pub use gate::{GateState, GateTransition, SaveGate};
pub use locker::{Locker, PublishingLocks};
