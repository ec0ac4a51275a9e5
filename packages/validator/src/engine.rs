use crate::{ValidationError, ValidationReport};
use blockgate_common::{AttributeTree, AttributeValue, Record};
use blockgate_schema::{FieldKind, FieldSchema, WidgetSchema};
use std::sync::Arc;
use tracing::debug;

/// Validates trees of a single widget type
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    schema: Arc<WidgetSchema>,
}

impl ValidationEngine {
    pub fn new(schema: Arc<WidgetSchema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &WidgetSchema {
        &self.schema
    }

    pub fn run(&self, tree: &AttributeTree) -> ValidationReport {
        validate(&self.schema, tree)
    }
}

/// Validate `tree` against `schema`
pub fn validate(schema: &WidgetSchema, tree: &AttributeTree) -> ValidationReport {
    let mut errors = Vec::new();
    check_record(&schema.fields, Some(tree), &Scope::root(), &mut errors);

    debug!(widget = %schema.name, errors = errors.len(), "validation complete");

    ValidationReport::new(errors)
}

/// Prefix applied to error paths inside a record
///
/// Top level: no prefix. Inside a group: `details-`. Inside a list item:
/// the item label plus every enclosing position, e.g. `project-1-0-`.
#[derive(Debug, Clone, Default)]
struct Scope {
    prefix: String,
    positions: Vec<usize>,
}

impl Scope {
    fn root() -> Self {
        Self::default()
    }

    fn path_of(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    fn group(&self, name: &str) -> Self {
        Self {
            prefix: format!("{}{}-", self.prefix, name),
            positions: self.positions.clone(),
        }
    }

    fn item(&self, label: &str, position: usize) -> Self {
        let mut positions = self.positions.clone();
        positions.push(position);
        let joined = positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        Self {
            prefix: format!("{}-{}-", label, joined),
            positions,
        }
    }
}

/// Check every declared field of `record` (absent record = all fields empty)
fn check_record(
    fields: &[FieldSchema],
    record: Option<&Record>,
    scope: &Scope,
    errors: &mut Vec<ValidationError>,
) {
    for field in fields {
        let value = record.and_then(|record| record.get(&field.name));

        match &field.kind {
            FieldKind::Text | FieldKind::Flag => {
                let empty = value.map_or(true, AttributeValue::is_blank);
                require(field, empty, scope, errors);
            }
            FieldKind::Media => {
                let empty = value
                    .and_then(AttributeValue::media_url)
                    .map_or(true, |url| url.trim().is_empty());
                require(field, empty, scope, errors);
            }
            FieldKind::Group { fields } => {
                let group = value.and_then(AttributeValue::as_group);
                require(field, group.map_or(true, Record::is_empty), scope, errors);
                check_record(fields, group, &scope.group(&field.name), errors);
            }
            FieldKind::List { item, fields } => {
                let items = value.and_then(AttributeValue::as_list).unwrap_or_default();
                require(field, items.is_empty(), scope, errors);
                for (position, record) in items.iter().enumerate() {
                    check_record(fields, Some(record), &scope.item(item, position), errors);
                }
            }
        }
    }
}

fn require(field: &FieldSchema, empty: bool, scope: &Scope, errors: &mut Vec<ValidationError>) {
    if let (true, Some(message)) = (empty, &field.required) {
        errors.push(ValidationError::new(scope.path_of(&field.name), message.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockgate_schema::builtin;

    #[test]
    fn test_scope_paths() {
        let root = Scope::root();
        assert_eq!(root.path_of("title"), "title");
        assert_eq!(root.group("details").path_of("image"), "details-image");
        assert_eq!(root.item("job", 2).path_of("projects"), "job-2-projects");
        assert_eq!(root.item("job", 1).item("project", 0).path_of("link"), "project-1-0-link");
        assert_eq!(root.group("details").item("requisite", 3).path_of("type"), "requisite-3-type");
    }

    #[test]
    fn test_intro_missing_title() {
        let tree = Record::new()
            .with("title", "")
            .with("text", "hello")
            .with("buttonText", "Go");
        let report = validate(&builtin::intro(), &tree);
        assert_eq!(
            report.errors(),
            &[ValidationError::new("title", "Title is required")]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let tree = Record::new()
            .with("title", "   ")
            .with("buttonText", "Back home");
        assert_eq!(validate(&builtin::errorpage(), &tree).fields(), vec!["title"]);
    }

    #[test]
    fn test_missing_media_object_counts_as_empty() {
        let tree = Record::new()
            .with("title", "Stack")
            .with("technologies", vec![Record::new()]);
        assert_eq!(
            validate(&builtin::technologies(), &tree).fields(),
            vec!["technology-0-image"]
        );
    }

    #[test]
    fn test_media_object_with_extra_keys() {
        let tree: AttributeTree = serde_json::from_str(
            r#"{"title": "Stack", "technologies": [
                {"image": {"id": 12, "url": "rust.svg", "alt": ""}},
                {"image": {"id": 13, "url": " "}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            validate(&builtin::technologies(), &tree).fields(),
            vec!["technology-1-image"]
        );
    }

    #[test]
    fn test_wrong_value_types_do_not_panic() {
        let tree = Record::new()
            .with("title", vec![Record::new()])
            .with("projects", "not a list");
        let report = validate(&builtin::projects(), &tree);
        assert_eq!(report.fields(), vec!["projects"]);
    }

    #[test]
    fn test_numeric_zero_counts_as_empty() {
        let tree: AttributeTree =
            serde_json::from_str(r#"{"title": 0, "text": 1, "buttonText": "Go"}"#).unwrap();
        assert_eq!(validate(&builtin::intro(), &tree).fields(), vec!["title"]);
    }

    #[test]
    fn test_optional_fields_never_report() {
        let schema = WidgetSchema::new("note").field(FieldSchema::text("caption"));
        assert!(validate(&schema, &Record::new()).is_valid());
    }

    #[test]
    fn test_engine_runs_its_schema() {
        let engine = ValidationEngine::new(Arc::new(builtin::intro()));
        assert_eq!(engine.run(&Record::new()).len(), 3);
        assert_eq!(engine.schema().name, "intro");
    }
}
