//! # Blockgate Widget
//!
//! One editable widget instance: attribute store, validation and save gate
//! wired together.
//!
//! ```text
//! edit ─→ AttributeStore::replace ─→ Revalidator ─→ validate ─→ SaveGate::observe
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockgate_gate::PublishingLocks;
//! use blockgate_schema::SchemaRegistry;
//! use blockgate_widget::{WidgetInstance, WidgetOptions};
//!
//! let registry = SchemaRegistry::new();
//! let locks = Arc::new(PublishingLocks::new());
//!
//! let mut intro = WidgetInstance::insert(
//!     "block-1",
//!     registry.schema_for("intro").unwrap(),
//!     locks.clone(),
//!     &WidgetOptions::default(),
//! );
//! assert!(locks.is_locked());
//!
//! intro.set_field(&TreePath::field("title"), "Welcome")?;
//! ```

mod instance;
mod options;
mod revalidator;

pub use instance::WidgetInstance;
pub use options::{WidgetOptions, DEFAULT_LOCK_NAME};
pub use revalidator::Revalidator;
