use blockgate_common::{AttributeValue, MediaRef, Record};
use serde::{Deserialize, Serialize};

/// Shape of a field's value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Plain or rich text, stored as a string
    Text,

    /// Boolean toggle
    Flag,

    /// `{url, alt}` reference; only the url counts towards required-ness
    Media,

    /// Nested record stored as a plain object
    Group { fields: Vec<FieldSchema> },

    /// Ordered collection of records
    List {
        /// Singular label used to address items in error paths (`job`, `slide`)
        item: String,
        fields: Vec<FieldSchema>,
    },
}

impl FieldKind {
    /// Nested field declarations (empty for leaf kinds)
    pub fn children(&self) -> &[FieldSchema] {
        match self {
            FieldKind::Group { fields } | FieldKind::List { fields, .. } => fields,
            FieldKind::Text | FieldKind::Flag | FieldKind::Media => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Flag => "flag",
            FieldKind::Media => "media",
            FieldKind::Group { .. } => "group",
            FieldKind::List { .. } => "list",
        }
    }
}

/// Declaration of a single named field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,

    #[serde(flatten)]
    pub kind: FieldKind,

    /// Message reported while the field is empty; `None` means optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
}

impl FieldSchema {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    pub fn media(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Media)
    }

    pub fn group(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self::new(name, FieldKind::Group { fields })
    }

    pub fn list(
        name: impl Into<String>,
        item: impl Into<String>,
        fields: Vec<FieldSchema>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::List {
                item: item.into(),
                fields,
            },
        )
    }

    /// Mark the field as required, reporting `message` while it is empty
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Empty value a freshly inserted widget or record starts with
    pub fn default_value(&self) -> AttributeValue {
        match &self.kind {
            FieldKind::Text => AttributeValue::Text(String::new()),
            FieldKind::Flag => AttributeValue::Flag(false),
            FieldKind::Media => AttributeValue::Media(MediaRef::default()),
            FieldKind::Group { fields } => AttributeValue::Group(default_record(fields)),
            FieldKind::List { .. } => AttributeValue::List(Vec::new()),
        }
    }
}

/// Record with every declared field at its default
pub(crate) fn default_record(fields: &[FieldSchema]) -> Record {
    fields
        .iter()
        .map(|field| (field.name.clone(), field.default_value()))
        .collect()
}

/// Add defaults for declared fields missing from `record`, descending into
/// groups and list items. Values already present are kept as they are.
pub(crate) fn fill_defaults(record: &mut Record, fields: &[FieldSchema]) {
    for field in fields {
        match record.get_mut(&field.name) {
            None => {
                record.insert(field.name.clone(), field.default_value());
            }
            Some(AttributeValue::Group(inner)) => fill_defaults(inner, field.kind.children()),
            Some(AttributeValue::List(items)) => {
                for item in items.iter_mut() {
                    fill_defaults(item, field.kind.children());
                }
            }
            Some(_) => {}
        }
    }
}
