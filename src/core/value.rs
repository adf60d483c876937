use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage kind of one dataset field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Int,
    Float,
    Text,
}

impl FieldKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// One table cell. `Null` marks an empty source cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Value {
    /// Numeric view of the cell; integers widen to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) | Self::Null => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the cell may be stored in a field of `kind`.
    ///
    /// `Null` is storable under any kind; `Int` is storable under `Float`
    /// (the ingest layer widens mixed numeric columns the same way).
    #[must_use]
    pub fn matches_kind(&self, kind: FieldKind) -> bool {
        match self {
            Self::Null => true,
            Self::Int(_) => matches!(kind, FieldKind::Int | FieldKind::Float),
            Self::Float(_) => kind == FieldKind::Float,
            Self::Text(_) => kind == FieldKind::Text,
        }
    }
}
