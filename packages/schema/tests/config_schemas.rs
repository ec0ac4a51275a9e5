//! Widget schemas declared as JSON, the way they arrive from a config file

use blockgate_common::{AttributeValue, TreePath};
use blockgate_schema::{FieldKind, SchemaRegistry, WidgetSchema};

#[test]
fn test_json_declared_widget_registers_and_builds_defaults() {
    let json = r#"{
        "name": "testimonials",
        "fields": [
            { "name": "title", "kind": "text", "required": "Title is required" },
            {
                "name": "quotes",
                "kind": "list",
                "item": "quote",
                "required": "At least one quote is required",
                "fields": [
                    { "name": "author", "kind": "text", "required": "Author is required" },
                    { "name": "photo", "kind": "media" },
                    { "name": "featured", "kind": "flag" }
                ]
            }
        ]
    }"#;

    let schema: WidgetSchema = serde_json::from_str(json).unwrap();
    let mut registry = SchemaRegistry::new();
    assert!(registry.register(schema).unwrap().is_none());

    let schema = registry.schema_for("testimonials").unwrap();
    assert!(matches!(schema.fields[1].kind, FieldKind::List { ref item, .. } if item == "quote"));

    let record = schema.default_record(&TreePath::field("quotes")).unwrap();
    assert_eq!(record.get("author"), Some(&AttributeValue::from("")));
    assert_eq!(record.get("featured"), Some(&AttributeValue::from(false)));
}

#[test]
fn test_builtin_default_trees_match_block_attributes() {
    let registry = SchemaRegistry::new();

    let contacts = registry.schema_for("contacts").unwrap().default_tree();
    assert_eq!(
        serde_json::to_value(&contacts).unwrap(),
        serde_json::json!({
            "details": { "image": { "url": "", "alt": "" }, "requisites": [] },
            "slides": []
        })
    );

    let projects = registry.schema_for("projects").unwrap();
    let project = projects.default_record(&TreePath::field("projects")).unwrap();
    assert_eq!(
        serde_json::to_value(&project).unwrap(),
        serde_json::json!({
            "gif": { "url": "", "alt": "" },
            "image": { "url": "", "alt": "" },
            "isLive": false,
            "link": "",
            "repo": ""
        })
    );
}
