//! Parsed-blocks documents as the site exposes them next to page content.

use blockgate_common::Record;
use serde::{Deserialize, Deserializer};

/// One block of a parsed post body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBlock {
    /// `namespace/type`, or null for freeform HTML between blocks
    #[serde(default)]
    pub block_name: Option<String>,

    #[serde(default, deserialize_with = "attrs_or_empty_array")]
    pub attrs: Record,

    #[serde(default)]
    pub inner_blocks: Vec<ParsedBlock>,
}

/// A block located in the document tree
#[derive(Debug)]
pub struct LocatedBlock<'a> {
    /// Dotted position, `2` or `2.0.1` for inner blocks
    pub position: String,
    pub widget_type: &'a str,
    pub block: &'a ParsedBlock,
}

impl ParsedBlock {
    /// Widget type: the block name after its namespace
    pub fn widget_type(&self) -> Option<&str> {
        let name = self.block_name.as_deref()?;
        Some(name.rsplit('/').next().unwrap_or(name))
    }
}

/// Every named block, depth-first in document order
pub fn flatten(blocks: &[ParsedBlock]) -> Vec<LocatedBlock<'_>> {
    let mut located = Vec::new();
    collect(blocks, "", &mut located);
    located
}

fn collect<'a>(blocks: &'a [ParsedBlock], prefix: &str, out: &mut Vec<LocatedBlock<'a>>) {
    for (i, block) in blocks.iter().enumerate() {
        let position = if prefix.is_empty() {
            i.to_string()
        } else {
            format!("{}.{}", prefix, i)
        };
        if let Some(widget_type) = block.widget_type() {
            out.push(LocatedBlock {
                position: position.clone(),
                widget_type,
                block,
            });
        }
        collect(&block.inner_blocks, &position, out);
    }
}

// Blocks without attributes serialize them as `[]`
fn attrs_or_empty_array<'de, D>(deserializer: D) -> Result<Record, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Attrs {
        Record(Record),
        Empty(Vec<serde_json::Value>),
    }

    match Attrs::deserialize(deserializer)? {
        Attrs::Record(record) => Ok(record),
        Attrs::Empty(items) if items.is_empty() => Ok(Record::new()),
        Attrs::Empty(_) => Err(serde::de::Error::custom("block attrs must be an object")),
    }
}
