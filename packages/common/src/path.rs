//! # Tree Paths
//!
//! Addresses a value anywhere inside an attribute tree.
//!
//! A path is a sequence of field names and list positions, written the way
//! a host adapter would spell it:
//!
//! ```text
//! title               → top-level field
//! details.requisites  → field of a nested group
//! jobs[2].projects    → field of the third record in `jobs`
//! ```
//!
//! Positions are identities only for as long as the list is not mutated:
//! removing `jobs[1]` makes the old `jobs[2]` answer to `jobs[1]`.

use crate::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of a [`TreePath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named field of a record
    Field(String),

    /// Position inside a list of records
    Index(usize),
}

/// Address of a value inside an attribute tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreePath {
    segments: Vec<PathSegment>,
}

impl TreePath {
    /// The empty path (the tree itself)
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a top-level field
    pub fn field(name: impl Into<String>) -> Self {
        Self::root().then_field(name)
    }

    /// Extend with a field name
    pub fn then_field(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Extend with a list position
    pub fn then_index(mut self, position: usize) -> Self {
        self.segments.push(PathSegment::Index(position));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent path and the last segment
    pub fn split_last(&self) -> Option<(TreePath, &PathSegment)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            TreePath {
                segments: parent.to_vec(),
            },
            last,
        ))
    }

    /// Field names only, positions dropped (`jobs[2].projects` → `jobs`, `projects`)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            PathSegment::Field(name) => Some(name.as_str()),
            PathSegment::Index(_) => None,
        })
    }

    /// Parse the dotted/indexed notation
    pub fn parse(input: &str) -> CommonResult<Self> {
        let invalid = |reason: &str| CommonError::InvalidPath {
            path: input.to_string(),
            reason: reason.to_string(),
        };

        let mut path = Self::root();
        if input.is_empty() {
            return Ok(path);
        }

        for part in input.split('.') {
            let (name, mut rest) = match part.find('[') {
                Some(bracket) => part.split_at(bracket),
                None => (part, ""),
            };
            if name.is_empty() {
                return Err(invalid("empty field name"));
            }
            path = path.then_field(name);

            while !rest.is_empty() {
                if !rest.starts_with('[') {
                    return Err(invalid("unexpected characters after ']'"));
                }
                let close = rest.find(']').ok_or_else(|| invalid("unclosed '['"))?;
                let position = rest[1..close]
                    .parse::<usize>()
                    .map_err(|_| invalid("position is not a number"))?;
                path = path.then_index(position);
                rest = &rest[close + 1..];
            }
        }

        Ok(path)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(position) => write!(f, "[{}]", position)?,
            }
        }
        Ok(())
    }
}

impl FromStr for TreePath {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TreePath {
    type Error = CommonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TreePath> for String {
    fn from(path: TreePath) -> Self {
        path.to_string()
    }
}
