mod bar;
mod chart;
mod heatmap;
mod histogram;
mod json_contract;
mod series;
mod surface;

pub use bar::{BarChart, BarGroup, BarValue};
pub use chart::{ChartSizing, FacetPanel, RenderedChart};
pub use heatmap::HeatmapChart;
pub use histogram::{HistogramBin, HistogramChart};
pub use json_contract::{RENDERED_CHART_JSON_SCHEMA_V1, RenderedChartJsonContractV1};
pub use series::{RenderedSeries, SeriesMark, SeriesPoint};
pub use surface::{NullSurface, RenderSurface};
