use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};
use crate::render::RenderedChart;

pub const RENDERED_CHART_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope for shipping chart descriptors across a process
/// boundary or persisting them for replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChartJsonContractV1 {
    pub schema_version: u32,
    pub chart: RenderedChart,
}

impl RenderedChart {
    pub fn to_json_pretty(&self) -> BindResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BindError::InvalidData(format!("failed to serialize chart: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> BindResult<String> {
        let payload = RenderedChartJsonContractV1 {
            schema_version: RENDERED_CHART_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BindError::InvalidData(format!("failed to serialize chart contract v1: {e}"))
        })
    }

    /// Accepts either a bare chart or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> BindResult<Self> {
        if let Ok(chart) = serde_json::from_str::<RenderedChart>(input) {
            return Ok(chart);
        }
        let payload: RenderedChartJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| BindError::InvalidData(format!("failed to parse chart json: {e}")))?;
        if payload.schema_version != RENDERED_CHART_JSON_SCHEMA_V1 {
            return Err(BindError::InvalidData(format!(
                "unsupported chart schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
