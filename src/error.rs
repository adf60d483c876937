use thiserror::Error;

use crate::core::FieldKind;

pub type BindResult<T> = Result<T, BindError>;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("dataset `{dataset}` has no field `{field}`")]
    MissingField { dataset: String, field: String },

    #[error("field `{field}` in dataset `{dataset}` is {actual}, expected {expected}")]
    FieldKindMismatch {
        dataset: String,
        field: String,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("unknown dataset `{0}`")]
    UnknownDataset(String),

    #[error("failed to ingest `{name}`: {message}")]
    Ingest { name: String, message: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
