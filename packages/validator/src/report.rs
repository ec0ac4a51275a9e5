use crate::ValidationError;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Outcome of one validation pass
///
/// Validity is derived from the error list and never stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in reporting order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether `field` currently has an error (the per-field lookup a renderer does)
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Error paths in reporting order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.field.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Serializes as `{ "errors": [...], "isValid": bool }`
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.end()
    }
}
