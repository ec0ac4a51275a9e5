//! # Widget Instance
//!
//! Editing state of one widget placed in a document.
//!
//! ## Lifecycle
//!
//! ```text
//! insert / load → first validation → edits* → teardown (or drop)
//! ```
//!
//! Validity is correct from the moment `insert`/`load` returns, so the
//! first render already knows whether publishing is blocked.

use crate::{Revalidator, WidgetOptions};
use blockgate_common::{AttributeTree, AttributeValue, Record, TreePath};
use blockgate_editor::{AttributeStore, Edit, EditorError};
use blockgate_gate::{GateState, Locker, SaveGate};
use blockgate_schema::WidgetSchema;
use blockgate_validator::{ValidationEngine, ValidationError, ValidationReport};
use std::sync::Arc;
use tracing::info;

/// A widget being edited
#[derive(Debug)]
pub struct WidgetInstance {
    /// Host-assigned instance identifier
    id: String,

    store: AttributeStore<Revalidator>,
}

impl WidgetInstance {
    /// Insert a new widget with its schema defaults
    pub fn insert(
        id: impl Into<String>,
        schema: Arc<WidgetSchema>,
        locker: Arc<dyn Locker>,
        options: &WidgetOptions,
    ) -> Self {
        let tree = schema.default_tree();
        Self::start(id.into(), schema, tree, locker, options)
    }

    /// Open a widget from persisted attributes, filling in missing defaults
    pub fn load(
        id: impl Into<String>,
        schema: Arc<WidgetSchema>,
        attributes: AttributeTree,
        locker: Arc<dyn Locker>,
        options: &WidgetOptions,
    ) -> Self {
        let tree = schema.with_defaults(attributes);
        Self::start(id.into(), schema, tree, locker, options)
    }

    fn start(
        id: String,
        schema: Arc<WidgetSchema>,
        tree: AttributeTree,
        locker: Arc<dyn Locker>,
        options: &WidgetOptions,
    ) -> Self {
        let gate = SaveGate::new(options.lock_name_for(&id), locker);
        let observer = Revalidator::new(ValidationEngine::new(schema), gate);
        let store = AttributeStore::new(tree, observer);

        let instance = Self { id, store };
        info!(
            widget = instance.widget_type(),
            instance = %instance.id,
            valid = instance.is_valid(),
            "widget instance started"
        );
        instance
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn widget_type(&self) -> &str {
        &self.schema().name
    }

    pub fn schema(&self) -> &WidgetSchema {
        self.store.observer().engine().schema()
    }

    /// Snapshot of the current attributes
    pub fn attributes(&self) -> Arc<AttributeTree> {
        self.store.get()
    }

    /// Number of edits applied since the instance started
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    pub fn report(&self) -> &ValidationReport {
        self.store.observer().report()
    }

    pub fn errors(&self) -> &[ValidationError] {
        self.report().errors()
    }

    pub fn is_valid(&self) -> bool {
        self.report().is_valid()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.report().has_error(field)
    }

    pub fn gate_state(&self) -> GateState {
        self.store.observer().gate().state()
    }

    pub fn lock_name(&self) -> &str {
        self.store.observer().gate().name()
    }

    /// Assign a field directly (rich text change, media selection, toggle)
    pub fn set_field(
        &mut self,
        path: &TreePath,
        value: impl Into<AttributeValue>,
    ) -> Result<&ValidationReport, EditorError> {
        self.store.edit().set_field(path, value.into())?;
        Ok(self.report())
    }

    /// Append `record` to the list at `path`, returning its position
    pub fn append(&mut self, path: &TreePath, record: Record) -> Result<usize, EditorError> {
        self.store.edit().append(path, record)
    }

    /// Append the schema's empty record to the list at `path`
    pub fn append_default(&mut self, path: &TreePath) -> Result<usize, EditorError> {
        let record = self
            .schema()
            .default_record(path)
            .ok_or_else(|| EditorError::NotAList(path.clone()))?;
        self.append(path, record)
    }

    /// Remove the record at `position`; later records move down by one
    pub fn remove_at(&mut self, path: &TreePath, position: usize) -> Result<Record, EditorError> {
        self.store.edit().remove_at(path, position)
    }

    pub fn update_at(
        &mut self,
        path: &TreePath,
        position: usize,
        field: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<&ValidationReport, EditorError> {
        self.store.edit().update_at(path, position, field, value.into())?;
        Ok(self.report())
    }

    pub fn apply(&mut self, edit: &Edit) -> Result<&ValidationReport, EditorError> {
        self.store.apply(edit)?;
        Ok(self.report())
    }

    /// Remove the instance, releasing its lock whatever its validity.
    /// Returns the final attributes for the host to persist.
    pub fn teardown(self) -> Arc<AttributeTree> {
        let (tree, observer) = self.store.into_parts();
        info!(instance = %self.id, "widget instance removed");
        observer.into_gate().teardown();
        tree
    }
}
