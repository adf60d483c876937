use crate::core::{Dataset, FieldKind};
use crate::error::BindResult;

use super::ChartSpec;

/// Field indices resolved once per bind call, before any row work.
///
/// Resolving everything up front means a misspelled or mistyped spec field
/// fails the whole call with a precise error instead of surfacing per row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BindPlan {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) color: usize,
    pub(crate) facet: Option<usize>,
    pub(crate) line_group: Option<usize>,
}

impl BindPlan {
    pub(crate) fn resolve(dataset: &Dataset, spec: &ChartSpec) -> BindResult<Self> {
        spec.validate()?;
        let x = dataset.require_field_of_kind(&spec.x, FieldKind::is_numeric, FieldKind::Float)?;
        let y = dataset.require_field_of_kind(&spec.y, FieldKind::is_numeric, FieldKind::Float)?;
        let color = dataset.require_field_of_kind(
            &spec.color,
            |kind| kind == FieldKind::Text,
            FieldKind::Text,
        )?;
        let facet = spec
            .facet
            .as_deref()
            .map(|name| {
                dataset.require_field_of_kind(name, |kind| kind == FieldKind::Text, FieldKind::Text)
            })
            .transpose()?;
        let line_group = spec
            .line_group
            .as_deref()
            .map(|name| {
                dataset.require_field_of_kind(name, |kind| kind == FieldKind::Text, FieldKind::Text)
            })
            .transpose()?;
        Ok(Self {
            x,
            y,
            color,
            facet,
            line_group,
        })
    }
}
