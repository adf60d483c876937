use serde::{Deserialize, Serialize};

use crate::core::FieldKind;
use crate::error::{BindError, BindResult};

/// Named, kinded column of a dataset schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered field list with by-name lookup.
///
/// Field names are case-sensitive and unique within one schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> BindResult<Self> {
        for (index, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(BindError::InvalidData(format!(
                    "schema field {index} has an empty name"
                )));
            }
            if fields[..index].iter().any(|seen| seen.name == field.name) {
                return Err(BindError::InvalidData(format!(
                    "schema has duplicate field `{}`",
                    field.name
                )));
            }
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    #[must_use]
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}
