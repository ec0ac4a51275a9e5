use crate::field::{default_record, fill_defaults, FieldKind, FieldSchema};
use crate::SchemaError;
use blockgate_common::{AttributeTree, Record, TreePath};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Attribute schema of one widget type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSchema {
    /// Widget type name (the block name without its namespace)
    pub name: String,

    /// Top-level fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// Flattened view of one declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPattern {
    /// `title`, `jobs[].projects[].link`, `details.image`
    pub pattern: String,
    pub kind: &'static str,
    pub required: bool,
}

impl WidgetSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a top-level field declaration
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Attribute tree of a freshly inserted widget
    pub fn default_tree(&self) -> AttributeTree {
        default_record(&self.fields)
    }

    /// Complete a persisted tree with defaults for fields it lacks
    pub fn with_defaults(&self, mut tree: AttributeTree) -> AttributeTree {
        fill_defaults(&mut tree, &self.fields);
        tree
    }

    /// Declaration of the field addressed by `path` (list positions ignored)
    pub fn field_at(&self, path: &TreePath) -> Option<&FieldSchema> {
        let mut fields = self.fields.as_slice();
        let mut found = None;
        for name in path.field_names() {
            let field = fields.iter().find(|field| field.name == name)?;
            fields = field.kind.children();
            found = Some(field);
        }
        found
    }

    /// Empty record to append to the list at `path`
    pub fn default_record(&self, path: &TreePath) -> Option<Record> {
        match &self.field_at(path)?.kind {
            FieldKind::List { fields, .. } => Some(default_record(fields)),
            _ => None,
        }
    }

    /// Every declared field, depth-first in declaration order
    pub fn patterns(&self) -> Vec<FieldPattern> {
        let mut patterns = Vec::new();
        collect_patterns(&self.fields, "", &mut patterns);
        patterns
    }

    /// Reject declarations that would make error paths ambiguous
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::MissingName);
        }
        check_fields(&self.name, &self.fields)
    }
}

fn collect_patterns(fields: &[FieldSchema], prefix: &str, out: &mut Vec<FieldPattern>) {
    for field in fields {
        let pattern = format!("{}{}", prefix, field.name);
        out.push(FieldPattern {
            pattern: pattern.clone(),
            kind: field.kind.label(),
            required: field.is_required(),
        });
        match &field.kind {
            FieldKind::Group { fields } => {
                collect_patterns(fields, &format!("{}.", pattern), out)
            }
            FieldKind::List { fields, .. } => {
                collect_patterns(fields, &format!("{}[].", pattern), out)
            }
            _ => {}
        }
    }
}

/// Characters with a meaning in path notation (`jobs[0].title`)
const PATH_CHARS: [char; 3] = ['.', '[', ']'];

fn check_fields(widget: &str, fields: &[FieldSchema]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(SchemaError::EmptyFieldName {
                widget: widget.to_string(),
            });
        }
        if let Some(found) = field.name.chars().find(|c| PATH_CHARS.contains(c)) {
            return Err(SchemaError::ReservedFieldChar {
                widget: widget.to_string(),
                field: field.name.clone(),
                found,
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                widget: widget.to_string(),
                field: field.name.clone(),
            });
        }
        if let FieldKind::List { item, .. } = &field.kind {
            if item.trim().is_empty() {
                return Err(SchemaError::EmptyItemLabel {
                    widget: widget.to_string(),
                    field: field.name.clone(),
                });
            }
            // Error paths join labels and positions with '-'
            if item.contains('-') {
                return Err(SchemaError::ReservedItemChar {
                    widget: widget.to_string(),
                    field: field.name.clone(),
                    item: item.clone(),
                });
            }
        }
        check_fields(widget, field.kind.children())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockgate_common::AttributeValue;

    fn gallery() -> WidgetSchema {
        WidgetSchema::new("gallery")
            .field(FieldSchema::text("title").required("Title is required"))
            .field(
                FieldSchema::list(
                    "rows",
                    "row",
                    vec![
                        FieldSchema::text("caption"),
                        FieldSchema::list(
                            "cells",
                            "cell",
                            vec![FieldSchema::media("image").required("Image is required")],
                        ),
                    ],
                )
                .required("At least one row is required"),
            )
    }

    #[test]
    fn test_patterns_use_collection_notation() {
        let patterns: Vec<_> = gallery()
            .patterns()
            .into_iter()
            .map(|p| (p.pattern, p.required))
            .collect();
        assert_eq!(
            patterns,
            vec![
                ("title".to_string(), true),
                ("rows".to_string(), true),
                ("rows[].caption".to_string(), false),
                ("rows[].cells".to_string(), false),
                ("rows[].cells[].image".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_default_record_for_nested_list() {
        let schema = gallery();
        let path = TreePath::parse("rows[4].cells").unwrap();
        let record = schema.default_record(&path).unwrap();
        assert!(record.get("image").and_then(AttributeValue::as_media).is_some());

        assert!(schema.default_record(&TreePath::field("title")).is_none());
        assert!(schema.default_record(&TreePath::field("missing")).is_none());
    }

    #[test]
    fn test_with_defaults_fills_missing_fields() {
        let schema = gallery();
        let tree = schema.with_defaults(Record::new().with("title", "Mine"));
        assert_eq!(tree.get("title"), Some(&AttributeValue::from("Mine")));
        assert_eq!(tree.get("rows"), Some(&AttributeValue::List(vec![])));
    }

    #[test]
    fn test_check_rejects_duplicates() {
        let schema = WidgetSchema::new("broken")
            .field(FieldSchema::text("title"))
            .field(FieldSchema::media("title"));
        assert_eq!(
            schema.check(),
            Err(SchemaError::DuplicateField {
                widget: "broken".to_string(),
                field: "title".to_string(),
            })
        );
        assert!(gallery().check().is_ok());
    }

    #[test]
    fn test_check_rejects_empty_item_label() {
        let schema = WidgetSchema::new("broken").field(FieldSchema::list("rows", " ", vec![]));
        assert!(matches!(schema.check(), Err(SchemaError::EmptyItemLabel { .. })));
    }

    #[test]
    fn test_check_rejects_path_characters_in_field_names() {
        for name in ["label.main", "rows[0]", "cell]"] {
            let schema =
                WidgetSchema::new("broken").field(FieldSchema::text(name).required("Required"));
            assert!(
                matches!(schema.check(), Err(SchemaError::ReservedFieldChar { .. })),
                "{} should be rejected",
                name
            );
        }

        let nested = WidgetSchema::new("broken").field(FieldSchema::list(
            "rows",
            "row",
            vec![FieldSchema::text("a.b")],
        ));
        assert_eq!(
            nested.check(),
            Err(SchemaError::ReservedFieldChar {
                widget: "broken".to_string(),
                field: "a.b".to_string(),
                found: '.',
            })
        );
    }

    #[test]
    fn test_accepted_field_names_survive_path_round_trip() {
        let schema = gallery().field(FieldSchema::text("button_text-2"));
        assert!(schema.check().is_ok());
        for pattern in schema.patterns() {
            let name = pattern.pattern.rsplit(|c| c == '.' || c == ']').next().unwrap();
            let path = TreePath::field(name);
            assert_eq!(TreePath::parse(&path.to_string()).unwrap(), path);
        }
    }

    #[test]
    fn test_check_rejects_dash_in_item_label() {
        let schema = WidgetSchema::new("broken").field(FieldSchema::list(
            "rows",
            "a-b",
            vec![FieldSchema::text("x")],
        ));
        assert!(matches!(schema.check(), Err(SchemaError::ReservedItemChar { .. })));
    }
}
