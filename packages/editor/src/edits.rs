//! # Edits
//!
//! Editing operations expressed as data, so host adapters can forward UI
//! actions without calling into the editor API directly.
//!
//! ```json
//! { "op": "updateAt", "path": "jobs[0].projects", "position": 1, "field": "link", "value": "https://…" }
//! ```

use crate::{CollectionEditor, EditorError, StoreObserver};
use blockgate_common::{AttributeValue, Record, TreePath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Edit {
    /// Assign a field (title, a group field, a field of one record)
    SetField { path: TreePath, value: AttributeValue },

    /// Append a record to a list
    Append { path: TreePath, record: Record },

    /// Remove the record at a position
    RemoveAt { path: TreePath, position: usize },

    /// Replace one field of the record at a position
    UpdateAt {
        path: TreePath,
        position: usize,
        field: String,
        value: AttributeValue,
    },
}

impl Edit {
    pub fn apply<O: StoreObserver>(
        &self,
        editor: &mut CollectionEditor<'_, O>,
    ) -> Result<(), EditorError> {
        match self {
            Edit::SetField { path, value } => editor.set_field(path, value.clone()),
            Edit::Append { path, record } => editor.append(path, record.clone()).map(|_| ()),
            Edit::RemoveAt { path, position } => editor.remove_at(path, *position).map(|_| ()),
            Edit::UpdateAt {
                path,
                position,
                field,
                value,
            } => editor.update_at(path, *position, field, value.clone()),
        }
    }

    /// Get a debug name for this edit
    pub fn name(&self) -> &'static str {
        match self {
            Edit::SetField { .. } => "set_field",
            Edit::Append { .. } => "append",
            Edit::RemoveAt { .. } => "remove_at",
            Edit::UpdateAt { .. } => "update_at",
        }
    }

    /// Path of the field or list the edit touches
    pub fn path(&self) -> &TreePath {
        match self {
            Edit::SetField { path, .. }
            | Edit::Append { path, .. }
            | Edit::RemoveAt { path, .. }
            | Edit::UpdateAt { path, .. } => path,
        }
    }
}
