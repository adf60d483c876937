pub mod color;
pub mod dataset;
pub mod schema;
pub mod selection;
pub mod value;

pub use color::{Color, ColorAssigner, ColorMap, DEFAULT_PALETTE};
pub use dataset::{Dataset, SortDirection};
pub use schema::{Field, Schema};
pub use selection::SelectionState;
pub use value::{FieldKind, Value};
