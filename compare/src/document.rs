use std::{fmt, path::PathBuf};

use serde_json::Value;

use crate::compare::json_eq;

/// A decoded embedding document and the file it was read from.
///
/// No schema is enforced, the content is whatever JSON value the pipeline wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingDocument {
    pub path: PathBuf,
    pub value: Value,
}

impl EmbeddingDocument {
    pub fn new(path: impl Into<PathBuf>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }

    /// Deep structural equality with another document's content. The paths
    /// are not part of the comparison.
    pub fn structurally_eq(&self, other: &Self) -> bool {
        json_eq(&self.value, &other.value)
    }

    pub fn shape(&self) -> Shape {
        Shape::of(&self.value)
    }
}

/// Top-level kind of a document, with the element count for containers.
/// For a flat embedding vector this is its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    Array(usize),
    Object(usize),
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(items) => Self::Array(items.len()),
            Value::Object(map) => Self::Object(map.len()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool => f.write_str("boolean"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Array(len) => write!(f, "array of {len}"),
            Self::Object(len) => write!(f, "object with {len} keys"),
        }
    }
}
