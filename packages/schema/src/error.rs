//! Error types for schema declarations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Widget schema has no name")]
    MissingName,

    #[error("Widget '{widget}' declares field '{field}' more than once")]
    DuplicateField { widget: String, field: String },

    #[error("Widget '{widget}' has a field with an empty name")]
    EmptyFieldName { widget: String },

    #[error("List '{field}' in widget '{widget}' has an empty item label")]
    EmptyItemLabel { widget: String, field: String },

    #[error("Field '{field}' in widget '{widget}' contains reserved character '{found}'")]
    ReservedFieldChar {
        widget: String,
        field: String,
        found: char,
    },

    #[error("Item label '{item}' of list '{field}' in widget '{widget}' contains '-'")]
    ReservedItemChar {
        widget: String,
        field: String,
        item: String,
    },
}
