use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};
use crate::render::{ChartSizing, SeriesMark};

/// Declarative description of one chart slot.
///
/// A spec maps dataset fields to visual channels: x, y, the category field
/// driving color and selection filtering, optionally a facet field and a
/// secondary line-group field. Presentation metadata is carried into the
/// descriptor verbatim. Specs are serializable so hosts can keep dashboard
/// layouts in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub x: String,
    pub y: String,
    pub color: String,
    #[serde(default)]
    pub facet: Option<String>,
    #[serde(default)]
    pub line_group: Option<String>,
    #[serde(default)]
    pub mark: SeriesMark,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default = "default_facet_columns")]
    pub facet_columns: u32,
    #[serde(default)]
    pub sizing: ChartSizing,
}

impl ChartSpec {
    /// Creates a minimal line-chart spec from the three required channels.
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            color: color.into(),
            facet: None,
            line_group: None,
            mark: SeriesMark::default(),
            opacity: default_opacity(),
            title: String::new(),
            x_label: None,
            y_label: None,
            facet_columns: default_facet_columns(),
            sizing: ChartSizing::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the facet field; each distinct value becomes one sub-plot.
    #[must_use]
    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.facet = Some(facet.into());
        self
    }

    /// Sets the secondary grouping field separating lines within a facet.
    #[must_use]
    pub fn with_line_group(mut self, line_group: impl Into<String>) -> Self {
        self.line_group = Some(line_group.into());
        self
    }

    #[must_use]
    pub fn with_mark(mut self, mark: SeriesMark) -> Self {
        self.mark = mark;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Overrides the axis labels, which otherwise default to the field names.
    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    /// Sets the wrap width of the facet grid.
    #[must_use]
    pub fn with_facet_columns(mut self, facet_columns: u32) -> Self {
        self.facet_columns = facet_columns;
        self
    }

    #[must_use]
    pub fn with_sizing(mut self, sizing: ChartSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// X-axis label falling back to the field name.
    #[must_use]
    pub fn x_axis_label(&self) -> &str {
        self.x_label.as_deref().unwrap_or(&self.x)
    }

    /// Y-axis label falling back to the field name.
    #[must_use]
    pub fn y_axis_label(&self) -> &str {
        self.y_label.as_deref().unwrap_or(&self.y)
    }

    pub fn validate(&self) -> BindResult<()> {
        for (channel, name) in [("x", &self.x), ("y", &self.y), ("color", &self.color)] {
            if name.is_empty() {
                return Err(BindError::InvalidData(format!(
                    "chart spec `{channel}` field must not be empty"
                )));
            }
        }
        for (channel, name) in [("facet", &self.facet), ("line_group", &self.line_group)] {
            if name.as_deref() == Some("") {
                return Err(BindError::InvalidData(format!(
                    "chart spec `{channel}` field must not be empty when set"
                )));
            }
        }
        if self.facet_columns == 0 {
            return Err(BindError::InvalidData(
                "chart spec facet_columns must be at least 1".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(BindError::InvalidData(
                "chart spec opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes the spec to pretty JSON for dashboard config files.
    pub fn to_json_pretty(&self) -> BindResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BindError::InvalidData(format!("failed to serialize chart spec: {e}")))
    }

    /// Deserializes a spec from JSON.
    pub fn from_json_str(input: &str) -> BindResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BindError::InvalidData(format!("failed to parse chart spec: {e}")))
    }
}

fn default_opacity() -> f64 {
    1.0
}

fn default_facet_columns() -> u32 {
    3
}
