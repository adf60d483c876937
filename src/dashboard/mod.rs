//! Dashboard pages: ordered chart slots recomputed per selection change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bind::{ChartBinder, ChartSpec};
use crate::core::SelectionState;
use crate::error::BindResult;
use crate::ingest::DatasetCatalog;
use crate::render::RenderedChart;

/// One chart slot: which catalog dataset feeds which spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBinding {
    pub dataset: String,
    pub spec: ChartSpec,
}

impl ChartBinding {
    #[must_use]
    pub fn new(dataset: impl Into<String>, spec: ChartSpec) -> Self {
        Self {
            dataset: dataset.into(),
            spec,
        }
    }
}

/// Ordered set of chart slots rendered together.
///
/// The host calls [`DashboardPage::render`] synchronously whenever its
/// selection widget fires and swaps the fresh descriptors in wholesale;
/// output from a superseded call is simply dropped. The first failing slot
/// aborts the whole call, leaving the previous descriptors on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardPage {
    pub title: String,
    bindings: Vec<ChartBinding>,
}

impl DashboardPage {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bindings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_chart(mut self, dataset: impl Into<String>, spec: ChartSpec) -> Self {
        self.bindings.push(ChartBinding::new(dataset, spec));
        self
    }

    #[must_use]
    pub fn bindings(&self) -> &[ChartBinding] {
        &self.bindings
    }

    /// Binds every slot against the current selection, in slot order.
    pub fn render(
        &self,
        catalog: &DatasetCatalog,
        binder: &ChartBinder,
        selection: &SelectionState,
    ) -> BindResult<Vec<RenderedChart>> {
        let mut charts = Vec::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            let dataset = catalog.get(&binding.dataset)?;
            charts.push(binder.bind(dataset, selection, &binding.spec)?);
        }
        debug!(
            page = %self.title,
            charts = charts.len(),
            selected = selection.len(),
            "rendered dashboard page"
        );
        Ok(charts)
    }
}
