use std::cmp::Ordering;

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{FieldKind, Schema, Value};
use crate::error::{BindError, BindResult};

/// Sort direction for [`Dataset::sorted_by_float`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Immutable, in-memory row table.
///
/// A dataset is loaded once at process start-up and read-only afterwards;
/// every derived view (`distinct_text`, `sorted_by_float`) is a fresh value
/// and never mutates the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    schema: Schema,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Builds a dataset, validating row arity and per-cell kind against the
    /// schema. `Value::Null` is storable under any field kind.
    pub fn new(name: impl Into<String>, schema: Schema, rows: Vec<Vec<Value>>) -> BindResult<Self> {
        let name = name.into();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(BindError::InvalidData(format!(
                    "dataset `{name}` row {row_index} has {} values, schema has {}",
                    row.len(),
                    schema.len()
                )));
            }
            for (field_index, value) in row.iter().enumerate() {
                let field = schema
                    .field(field_index)
                    .ok_or_else(|| BindError::InvalidData("schema index out of range".to_owned()))?;
                if !value.matches_kind(field.kind) {
                    return Err(BindError::InvalidData(format!(
                        "dataset `{name}` row {row_index} field `{}` holds {value:?}, schema says {}",
                        field.name, field.kind
                    )));
                }
            }
        }
        Ok(Self { name, schema, rows })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn value(&self, row: usize, field: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|values| values.get(field))
    }

    /// Resolves a field name or reports which field is missing.
    pub fn require_field(&self, field: &str) -> BindResult<usize> {
        self.schema
            .index_of(field)
            .ok_or_else(|| BindError::MissingField {
                dataset: self.name.clone(),
                field: field.to_owned(),
            })
    }

    pub(crate) fn require_field_of_kind(
        &self,
        field: &str,
        accept: impl Fn(FieldKind) -> bool,
        expected: FieldKind,
    ) -> BindResult<usize> {
        let index = self.require_field(field)?;
        let actual = self
            .schema
            .field(index)
            .map(|f| f.kind)
            .unwrap_or(FieldKind::Text);
        if !accept(actual) {
            return Err(BindError::FieldKindMismatch {
                dataset: self.name.clone(),
                field: field.to_owned(),
                expected,
                actual,
            });
        }
        Ok(index)
    }

    /// Distinct values of a text field in first-encountered row order.
    ///
    /// Null cells contribute nothing. Hosts typically feed this into a
    /// selection widget, sorting if they want alphabetical options.
    pub fn distinct_text(&self, field: &str) -> BindResult<Vec<String>> {
        let index =
            self.require_field_of_kind(field, |kind| kind == FieldKind::Text, FieldKind::Text)?;
        let mut seen: IndexSet<&str> = IndexSet::new();
        for row in &self.rows {
            if let Some(text) = row[index].as_text() {
                seen.insert(text);
            }
        }
        Ok(seen.into_iter().map(str::to_owned).collect())
    }

    /// Derived dataset re-ordered by a numeric field.
    ///
    /// The sort is stable and Null cells order last in either direction.
    pub fn sorted_by_float(&self, field: &str, direction: SortDirection) -> BindResult<Dataset> {
        let index = self.require_field_of_kind(field, FieldKind::is_numeric, FieldKind::Float)?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            match (a[index].as_f64(), b[index].as_f64()) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left), Some(right)) => {
                    let ordering = OrderedFloat(left).cmp(&OrderedFloat(right));
                    match direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                }
            }
        });
        Ok(Self {
            name: self.name.clone(),
            schema: self.schema.clone(),
            rows,
        })
    }
}
