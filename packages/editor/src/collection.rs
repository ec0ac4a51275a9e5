//! # Collection Editing
//!
//! Append, remove and update records of a list anywhere in the tree, plus
//! plain field assignment.
//!
//! Every operation clones the current tree, edits the clone and passes it
//! to [`AttributeStore::replace`]. When an address does not resolve the
//! store is left untouched and no notification happens.
//!
//! Removing a record shifts every later record down one position. Callers
//! holding positions past the removed one must treat them as stale.

use crate::{AttributeStore, EditorError, StoreObserver};
use blockgate_common::{AttributeTree, AttributeValue, PathSegment, Record, TreePath};
use tracing::warn;

/// Edits a store's tree through whole-tree replacement
pub struct CollectionEditor<'a, O: StoreObserver> {
    store: &'a mut AttributeStore<O>,
}

impl<'a, O: StoreObserver> CollectionEditor<'a, O> {
    pub fn new(store: &'a mut AttributeStore<O>) -> Self {
        Self { store }
    }

    /// Append `record` to the list at `path`, returning its position
    pub fn append(&mut self, path: &TreePath, record: Record) -> Result<usize, EditorError> {
        self.modify(|tree| {
            let items = list_mut(tree, path)?;
            items.push(record);
            Ok(items.len() - 1)
        })
    }

    /// Remove the record at `position`; later records move down by one
    pub fn remove_at(&mut self, path: &TreePath, position: usize) -> Result<Record, EditorError> {
        self.modify(|tree| {
            let items = list_mut(tree, path)?;
            check_bounds(path, position, items.len())?;
            Ok(items.remove(position))
        })
    }

    /// Replace one field of the record at `position`, leaving its siblings alone
    pub fn update_at(
        &mut self,
        path: &TreePath,
        position: usize,
        field: &str,
        value: AttributeValue,
    ) -> Result<(), EditorError> {
        self.modify(|tree| {
            let items = list_mut(tree, path)?;
            check_bounds(path, position, items.len())?;
            items[position].insert(field, value);
            Ok(())
        })
    }

    /// Assign the field at `path` (`title`, `details.image`, `jobs[0].date`)
    pub fn set_field(&mut self, path: &TreePath, value: AttributeValue) -> Result<(), EditorError> {
        self.modify(|tree| {
            let (parent, last) = path
                .split_last()
                .ok_or_else(|| EditorError::NotAField(path.clone()))?;
            let PathSegment::Field(name) = last else {
                return Err(EditorError::NotAField(path.clone()));
            };
            let record = tree
                .record_at_mut(&parent)
                .ok_or(EditorError::RecordNotFound(parent.clone()))?;
            record.insert(name.as_str(), value);
            Ok(())
        })
    }

    fn modify<T>(
        &mut self,
        edit: impl FnOnce(&mut AttributeTree) -> Result<T, EditorError>,
    ) -> Result<T, EditorError> {
        let mut next = AttributeTree::clone(self.store.tree());
        match edit(&mut next) {
            Ok(output) => {
                self.store.replace(next);
                Ok(output)
            }
            Err(err) => {
                warn!(error = %err, "edit rejected");
                Err(err)
            }
        }
    }
}

fn list_mut<'t>(
    tree: &'t mut AttributeTree,
    path: &TreePath,
) -> Result<&'t mut Vec<Record>, EditorError> {
    tree.list_at_mut(path).ok_or_else(|| EditorError::NotAList(path.clone()))
}

fn check_bounds(path: &TreePath, position: usize, len: usize) -> Result<(), EditorError> {
    if position < len {
        Ok(())
    } else {
        Err(EditorError::PositionOutOfBounds {
            path: path.clone(),
            position,
            len,
        })
    }
}
