//! Selection-filtered chart binding.
//!
//! [`ChartBinder::bind`] is the pipeline's core step: it turns an immutable
//! dataset, the host's current selection, and a declarative [`ChartSpec`]
//! into a surface-agnostic [`crate::render::RenderedChart`]. Companion
//! binders cover histograms, grouped bars, and correlation heatmaps.

mod bar;
mod binder;
mod chart_spec;
mod heatmap;
mod histogram;
mod plan;

pub use bar::BarSpec;
pub use binder::ChartBinder;
pub use chart_spec::ChartSpec;
pub use heatmap::{HeatmapSpec, bind_heatmap};
pub use histogram::HistogramSpec;
