pub mod check;
pub mod check_blocks;
pub mod schema;
pub mod widgets;

pub use check::{check, CheckArgs};
pub use check_blocks::{check_blocks, CheckBlocksArgs};
pub use schema::{schema, SchemaArgs};
pub use widgets::widgets;

use anyhow::anyhow;
use blockgate_schema::{SchemaRegistry, WidgetSchema};
use std::sync::Arc;

/// Look up `widget`, listing the known types when it is missing
pub(crate) fn require_schema(
    registry: &SchemaRegistry,
    widget: &str,
) -> anyhow::Result<Arc<WidgetSchema>> {
    registry.schema_for(widget).ok_or_else(|| {
        let known: Vec<&str> = registry.widget_types().collect();
        anyhow!("Unknown widget type '{}' (known: {})", widget, known.join(", "))
    })
}
