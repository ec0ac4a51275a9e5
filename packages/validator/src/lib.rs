//! # Blockgate Validator
//!
//! Walks an attribute tree against its widget schema and lists every
//! required field that is still empty.
//!
//! Validation is pure and total: it never fails, and a missing nested
//! object is just an empty field. Errors come out in a fixed order
//! (declaration order, then nesting, then list position) that renderers
//! and tests may rely on.

mod engine;
mod error;
mod report;

pub use engine::{validate, ValidationEngine};
pub use error::ValidationError;
pub use report::ValidationReport;
