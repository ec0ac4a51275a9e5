//! # Blockgate Schema
//!
//! Declarative description of each widget's attribute tree: which fields
//! exist, how they nest, what their empty defaults are and which of them
//! must be filled before the document may be published.
//!
//! Schemas are data. Supporting a new widget means registering a new
//! [`WidgetSchema`], never writing new validation code.
//!
//! ```rust,ignore
//! use blockgate_schema::{FieldSchema, SchemaRegistry, WidgetSchema};
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     WidgetSchema::new("banner")
//!         .field(FieldSchema::text("title").required("Title is required"))
//!         .field(FieldSchema::media("image")),
//! )?;
//!
//! let banner = registry.schema_for("banner").unwrap();
//! let tree = banner.default_tree();
//! ```

pub mod builtin;
mod error;
mod field;
mod registry;
mod widget;

pub use error::SchemaError;
pub use field::{FieldKind, FieldSchema};
pub use registry::SchemaRegistry;
pub use widget::{FieldPattern, WidgetSchema};
