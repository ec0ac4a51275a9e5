//! # Attribute Values
//!
//! In-memory model of a widget's attributes, mirroring the JSON the host
//! persists for a block:
//!
//! ```json
//! {
//!   "title": "Experience",
//!   "jobs": [
//!     { "title": "Engineer", "image": { "url": "a.png", "alt": "" }, "projects": [] }
//!   ]
//! }
//! ```
//!
//! A tree is never edited in place by the editing layer. Updates clone the
//! tree, change the clone and hand the whole new tree back to the store.

use crate::path::{PathSegment, TreePath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to an uploaded media item, as returned by the media picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaRef {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// A media reference counts as empty when it has no url
    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

/// A single attribute value
///
/// Variant order matters for untagged deserialization: a JSON object with
/// exactly `url`/`alt` keys is a [`MediaRef`], any other object is a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<Record>),
    Media(MediaRef),
    Group(Record),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AttributeValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaRef> {
        match self {
            AttributeValue::Media(media) => Some(media),
            _ => None,
        }
    }

    /// Url of a media value
    ///
    /// Media objects carrying extra keys (`id`, `mime`) deserialize as a
    /// group; their `url` entry is used.
    pub fn media_url(&self) -> Option<&str> {
        match self {
            AttributeValue::Media(media) => Some(&media.url),
            AttributeValue::Group(record) => record.get("url").and_then(AttributeValue::as_text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Record>> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Record> {
        match self {
            AttributeValue::Group(record) => Some(record),
            _ => None,
        }
    }

    /// Whether the value is "falsy" for required-field purposes
    ///
    /// Text is trimmed before the check. Zero is blank, like any falsy number.
    pub fn is_blank(&self) -> bool {
        match self {
            AttributeValue::Null => true,
            AttributeValue::Flag(flag) => !flag,
            AttributeValue::Number(number) => number.as_f64() == Some(0.0),
            AttributeValue::Text(text) => text.trim().is_empty(),
            AttributeValue::List(items) => items.is_empty(),
            AttributeValue::Media(media) => media.is_empty(),
            AttributeValue::Group(record) => record.is_empty(),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        AttributeValue::Flag(flag)
    }
}

impl From<MediaRef> for AttributeValue {
    fn from(media: MediaRef) -> Self {
        AttributeValue::Media(media)
    }
}

impl From<Vec<Record>> for AttributeValue {
    fn from(items: Vec<Record>) -> Self {
        AttributeValue::List(items)
    }
}

impl From<Record> for AttributeValue {
    fn from(record: Record) -> Self {
        AttributeValue::Group(record)
    }
}

/// A mapping from field name to value: one entry of a collection, a nested
/// group, or a whole widget's attributes.
///
/// Records carry no identity of their own. Inside a list a record is known
/// only by its current position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, AttributeValue>);

/// Attributes of one widget instance
pub type AttributeTree = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttributeValue> {
        self.0.get_mut(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    /// Record addressed by `path`: the root, a group, or a list item
    pub fn record_at(&self, path: &TreePath) -> Option<&Record> {
        let mut record = self;
        let mut segments = path.segments().iter();
        while let Some(segment) = segments.next() {
            let PathSegment::Field(name) = segment else {
                return None;
            };
            record = match record.get(name)? {
                AttributeValue::Group(inner) => inner,
                AttributeValue::List(items) => match segments.next() {
                    Some(PathSegment::Index(position)) => items.get(*position)?,
                    _ => return None,
                },
                _ => return None,
            };
        }
        Some(record)
    }

    pub fn record_at_mut(&mut self, path: &TreePath) -> Option<&mut Record> {
        let mut record = self;
        let mut segments = path.segments().iter();
        while let Some(segment) = segments.next() {
            let PathSegment::Field(name) = segment else {
                return None;
            };
            record = match record.0.get_mut(name.as_str())? {
                AttributeValue::Group(inner) => inner,
                AttributeValue::List(items) => match segments.next() {
                    Some(PathSegment::Index(position)) => items.get_mut(*position)?,
                    _ => return None,
                },
                _ => return None,
            };
        }
        Some(record)
    }

    /// Value addressed by `path`; the last segment must be a field name
    pub fn value_at(&self, path: &TreePath) -> Option<&AttributeValue> {
        let (parent, last) = path.split_last()?;
        match last {
            PathSegment::Field(name) => self.record_at(&parent)?.get(name),
            PathSegment::Index(_) => None,
        }
    }

    pub fn value_at_mut(&mut self, path: &TreePath) -> Option<&mut AttributeValue> {
        let (parent, last) = path.split_last()?;
        match last {
            PathSegment::Field(name) => self.record_at_mut(&parent)?.get_mut(name),
            PathSegment::Index(_) => None,
        }
    }

    /// List addressed by `path`
    pub fn list_at(&self, path: &TreePath) -> Option<&[Record]> {
        self.value_at(path)?.as_list()
    }

    pub fn list_at_mut(&mut self, path: &TreePath) -> Option<&mut Vec<Record>> {
        self.value_at_mut(path)?.as_list_mut()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Record {
    type Item = (String, AttributeValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
