use serde::{Deserialize, Serialize};

/// A required field that is empty, addressed by its error path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error path such as `title`, `job-2-projects` or `project-1-0-link`
    pub field: String,

    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
