//! Error types for the editor
//!
//! These only describe malformed edit addresses. An empty or incomplete
//! tree is a normal state and never an error here.

use blockgate_common::TreePath;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("No record at '{0}'")]
    RecordNotFound(TreePath),

    #[error("No list at '{0}'")]
    NotAList(TreePath),

    #[error("Path '{0}' does not end in a field name")]
    NotAField(TreePath),

    #[error("Position {position} is out of bounds for '{path}' (length {len})")]
    PositionOutOfBounds {
        path: TreePath,
        position: usize,
        len: usize,
    },
}
