//! trellis-rs: selection-filtered chart binding for statistical dashboards.
//!
//! This crate turns an immutable dataset, the host's current category
//! selection, and a declarative chart spec into surface-agnostic render
//! descriptors. Filtering, faceting, series grouping, and color assignment
//! happen here; widgets and pixels stay on the host's side of
//! [`render::RenderSurface`].

pub mod bind;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod ingest;
pub mod render;
pub mod stats;
pub mod telemetry;

pub use bind::{ChartBinder, ChartSpec};
pub use error::{BindError, BindResult};
