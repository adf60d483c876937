use std::ffi::OsStr;
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::core::{Dataset, Field, FieldKind, Schema, Value};
use crate::error::{BindError, BindResult};

/// Reads a headered CSV into a typed dataset.
///
/// Column kinds are inferred from the non-empty cells: all-integer parses
/// as int, otherwise all-numeric as float, otherwise text. Empty cells
/// become nulls and never influence inference; a column with no non-empty
/// cells infers as text. Non-finite numeric literals (`NaN`, `inf`) become
/// nulls too, since a sample that cannot be plotted or summarized carries
/// no more information than a missing one.
pub fn read_dataset(name: &str, reader: impl Read) -> BindResult<Dataset> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| ingest_error(name, e))?
        .iter()
        .map(str::to_owned)
        .collect();
    if headers.is_empty() {
        return Err(ingest_error(name, "input has no header row"));
    }

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| ingest_error(name, e))?;
        raw_rows.push(record.iter().map(str::to_owned).collect());
    }

    let fields = headers
        .iter()
        .enumerate()
        .map(|(column, header)| Field::new(header, infer_kind(&raw_rows, column)))
        .collect();
    let schema = Schema::new(fields).map_err(|e| ingest_error(name, e))?;

    let rows = raw_rows
        .iter()
        .map(|raw| {
            raw.iter()
                .zip(schema.fields())
                .map(|(cell, field)| parse_cell(name, cell, field.kind))
                .collect::<BindResult<Vec<Value>>>()
        })
        .collect::<BindResult<Vec<_>>>()?;

    let dataset = Dataset::new(name, schema, rows)?;
    debug!(
        dataset = dataset.name(),
        rows = dataset.row_count(),
        fields = dataset.schema().len(),
        "ingested csv dataset"
    );
    Ok(dataset)
}

/// Reads a CSV file, naming the dataset after the file stem.
pub fn read_dataset_from_path(path: impl AsRef<Path>) -> BindResult<Dataset> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("dataset")
        .to_owned();
    let file = File::open(path)
        .map_err(|e| ingest_error(&name, format!("cannot open {}: {e}", path.display())))?;
    read_dataset(&name, file)
}

fn infer_kind(rows: &[Vec<String>], column: usize) -> FieldKind {
    let mut saw_value = false;
    let mut all_int = true;
    let mut all_float = true;
    for row in rows {
        let cell = &row[column];
        if cell.is_empty() {
            continue;
        }
        saw_value = true;
        if cell.parse::<i64>().is_err() {
            all_int = false;
        }
        if cell.parse::<f64>().is_err() {
            all_float = false;
        }
        if !all_float {
            break;
        }
    }
    if !saw_value {
        FieldKind::Text
    } else if all_int {
        FieldKind::Int
    } else if all_float {
        FieldKind::Float
    } else {
        FieldKind::Text
    }
}

fn parse_cell(dataset: &str, cell: &str, kind: FieldKind) -> BindResult<Value> {
    if cell.is_empty() {
        return Ok(Value::Null);
    }
    match kind {
        FieldKind::Int => cell
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| ingest_error(dataset, format!("bad integer `{cell}`: {e}"))),
        FieldKind::Float => {
            let parsed = cell
                .parse::<f64>()
                .map_err(|e| ingest_error(dataset, format!("bad number `{cell}`: {e}")))?;
            if parsed.is_finite() {
                Ok(Value::Float(parsed))
            } else {
                Ok(Value::Null)
            }
        }
        FieldKind::Text => Ok(Value::Text(cell.to_owned())),
    }
}

fn ingest_error(name: &str, message: impl Display) -> BindError {
    BindError::Ingest {
        name: name.to_owned(),
        message: message.to_string(),
    }
}
