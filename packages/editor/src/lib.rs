//! # Blockgate Editor
//!
//! In-memory attribute state of one widget instance and the operations
//! that edit it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI action: field setter / add / remove      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ CollectionEditor                            │
//! │  - clones the current tree                  │
//! │  - edits the clone                          │
//! │  - hands the whole tree to the store        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ AttributeStore: swap snapshot, bump version │
//! │  → StoreObserver::tree_replaced             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Whole-tree replacement**: a snapshot handed out by the store never changes
//! 2. **One observer**: notified synchronously after every replacement
//! 3. **Positional identity**: records are addressed by their current index
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockgate_common::{Record, TreePath};
//! use blockgate_editor::AttributeStore;
//!
//! let mut store = AttributeStore::new(tree, ());
//! let jobs = TreePath::field("jobs");
//!
//! let position = store.edit().append(&jobs, Record::new().with("title", ""))?;
//! store.edit().update_at(&jobs, position, "title", "Engineer".into())?;
//! store.edit().remove_at(&jobs, 0)?;
//! ```

mod collection;
mod edits;
mod errors;
mod store;

pub use collection::CollectionEditor;
pub use edits::Edit;
pub use errors::EditorError;
pub use store::{AttributeStore, StoreObserver};
