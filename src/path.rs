//! Access paths for locating values in nested input.
//!
//! This module provides [`AccessPath`] and [`PathSegment`] for recording
//! where a validation failure happened, and [`access`] for resolving a
//! recorded path back to the value it points at.

use std::fmt::{self, Display};

use crate::value::{Symbol, Value};

/// A segment of an access path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A string-keyed property (e.g. `user`, `email`)
    Key(String),
    /// An array index (e.g. `[0]`, `[42]`)
    Index(usize),
    /// A symbol-keyed property
    Symbol(Symbol),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<Symbol> for PathSegment {
    fn from(symbol: Symbol) -> Self {
        PathSegment::Symbol(symbol)
    }
}

/// A path to a value inside a root input.
///
/// Paths are immutable; the `push_*` methods return a new path, so a
/// combinator can derive one child path per element without disturbing
/// its own.
///
/// # Example
///
/// ```rust
/// use shapecheck::AccessPath;
///
/// let path = AccessPath::root()
///     .push_key("users")
///     .push_index(0)
///     .push_key("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccessPath {
    segments: Vec<PathSegment>,
}

impl AccessPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with a symbol segment appended.
    pub fn push_symbol(&self, symbol: Symbol) -> Self {
        self.push(PathSegment::Symbol(symbol))
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for AccessPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<PathSegment>> for AccessPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::Symbol(symbol) => write!(f, "[{}]", symbol)?,
            }
        }
        Ok(())
    }
}

/// Resolves `path` against `root`, returning the value it points at.
///
/// Each segment is applied in turn: keys read object properties, indices
/// read array elements (or the property named by the index on an object),
/// a canonical decimal key reads an array element, and symbols read
/// symbol-keyed properties. Any step that cannot be taken yields `None`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{access, AccessPath, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!([["0", 1, "2", 3]]));
/// let path = AccessPath::root().push_index(0).push_index(2);
///
/// assert_eq!(access(&root, &path), Some(&Value::from("2")));
/// assert_eq!(access(&root, &AccessPath::root().push_key("missing")), None);
/// ```
pub fn access<'a>(root: &'a Value, path: &AccessPath) -> Option<&'a Value> {
    path.segments()
        .try_fold(root, |current, segment| step(current, segment))
}

fn step<'a>(value: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (value, segment) {
        (Value::Object(object), PathSegment::Key(key)) => object.get(key),
        (Value::Object(object), PathSegment::Index(idx)) => object.get(&idx.to_string()),
        (Value::Object(object), PathSegment::Symbol(symbol)) => object.get_symbol(symbol),
        (Value::Array(items), PathSegment::Index(idx)) => items.get(*idx),
        (Value::Array(items), PathSegment::Key(key)) => {
            canonical_index(key).and_then(|idx| items.get(idx))
        }
        _ => None,
    }
}

/// Parses a key that spells an array index in canonical decimal form
/// (`"0"`, `"12"`, but not `"01"` or `"+1"`).
fn canonical_index(key: &str) -> Option<usize> {
    let idx: usize = key.parse().ok()?;
    (idx.to_string() == key).then_some(idx)
}
