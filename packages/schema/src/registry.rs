use crate::{builtin, SchemaError, WidgetSchema};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of widget schemas, keyed by widget type
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Arc<WidgetSchema>>,
}

impl SchemaRegistry {
    /// Create a new registry with all built-in widgets
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for schema in builtin::all() {
            registry.insert(schema);
        }
        registry
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Add a schema, replacing any schema registered under the same name
    pub fn register(
        &mut self,
        schema: WidgetSchema,
    ) -> Result<Option<Arc<WidgetSchema>>, SchemaError> {
        schema.check()?;
        Ok(self.insert(schema))
    }

    fn insert(&mut self, schema: WidgetSchema) -> Option<Arc<WidgetSchema>> {
        debug!(widget = %schema.name, fields = schema.fields.len(), "registering widget schema");
        self.schemas.insert(schema.name.clone(), Arc::new(schema))
    }

    /// Schema of `widget_type`, if registered
    pub fn schema_for(&self, widget_type: &str) -> Option<Arc<WidgetSchema>> {
        self.schemas.get(widget_type).cloned()
    }

    /// Registered widget types in name order
    pub fn widget_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("widgets", &self.schemas.keys().collect::<Vec<_>>())
            .finish()
    }
}
