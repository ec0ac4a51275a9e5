//! # Attribute Store
//!
//! Holds the current attribute tree of one widget instance.
//!
//! The tree lives behind an `Arc` and is only ever swapped out whole, so a
//! snapshot obtained through [`AttributeStore::get`] stays consistent no
//! matter what happens to the store afterwards.
//!
//! ## Lifecycle
//!
//! ```text
//! new(tree) → notify → [replace(tree) → notify]* → into_parts / drop
//! ```

use crate::{CollectionEditor, Edit, EditorError};
use blockgate_common::AttributeTree;
use std::sync::Arc;
use tracing::debug;

/// Receives every tree the store starts holding
///
/// Called synchronously, after the new tree is in place and before the
/// replacing call returns.
pub trait StoreObserver {
    fn tree_replaced(&mut self, tree: &AttributeTree, version: u64);
}

/// No-op observer
impl StoreObserver for () {
    fn tree_replaced(&mut self, _tree: &AttributeTree, _version: u64) {}
}

/// Attribute state of one widget instance
#[derive(Debug)]
pub struct AttributeStore<O: StoreObserver = ()> {
    tree: Arc<AttributeTree>,

    /// Increments on each replacement
    version: u64,

    observer: O,
}

impl<O: StoreObserver> AttributeStore<O> {
    /// Create a store and notify the observer of the initial tree
    pub fn new(tree: AttributeTree, observer: O) -> Self {
        let mut store = Self {
            tree: Arc::new(tree),
            version: 0,
            observer,
        };
        store.notify();
        store
    }

    /// Snapshot of the current tree
    pub fn get(&self) -> Arc<AttributeTree> {
        Arc::clone(&self.tree)
    }

    /// Borrow the current tree
    pub fn tree(&self) -> &AttributeTree {
        &self.tree
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the whole tree and notify the observer
    pub fn replace(&mut self, tree: AttributeTree) {
        self.tree = Arc::new(tree);
        self.version += 1;
        debug!(version = self.version, "attribute tree replaced");
        self.notify();
    }

    /// Collection and field operations over this store
    pub fn edit(&mut self) -> CollectionEditor<'_, O> {
        CollectionEditor::new(self)
    }

    /// Apply an edit described as data
    pub fn apply(&mut self, edit: &Edit) -> Result<(), EditorError> {
        debug!(edit = edit.name(), path = %edit.path(), "applying edit");
        edit.apply(&mut self.edit())
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Take the final tree and the observer out of the store
    pub fn into_parts(self) -> (Arc<AttributeTree>, O) {
        (self.tree, self.observer)
    }

    fn notify(&mut self) {
        self.observer.tree_replaced(&self.tree, self.version);
    }
}
