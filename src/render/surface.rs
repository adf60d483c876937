use crate::error::BindResult;
use crate::render::RenderedChart;

/// Contract implemented by the host's drawing layer.
///
/// Surfaces receive a fully materialized, deterministic descriptor so
/// pixel-level work stays isolated from the binding pipeline. An empty chart
/// (zero series) must be presented as an empty plot, never rejected.
pub trait RenderSurface {
    fn present(&mut self, chart: &RenderedChart) -> BindResult<()>;
}

/// No-op surface used by tests and headless hosts.
///
/// It still validates each descriptor so tests can catch malformed charts
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub presented_charts: usize,
    pub last_series_count: usize,
}

impl RenderSurface for NullSurface {
    fn present(&mut self, chart: &RenderedChart) -> BindResult<()> {
        chart.validate()?;
        self.presented_charts += 1;
        self.last_series_count = chart.series_count();
        Ok(())
    }
}
