use serde::Serialize;

use crate::core::{Effort, Lifecycle, MetricExtent, Record, SizeMetric, effort_glyph};

use super::tooltip::format_currency;

/// Footer KPIs shown under the chart.
///
/// Extents span the whole record list; `visible_count` follows the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub visible_count: usize,
    pub benefits_extent: Option<MetricExtent>,
    pub cost_extent: Option<MetricExtent>,
}

impl ChartSummary {
    #[must_use]
    pub fn new(records: &[Record], visible_count: usize) -> Self {
        Self {
            visible_count,
            benefits_extent: MetricExtent::from_records(records, SizeMetric::Benefits),
            cost_extent: MetricExtent::from_records(records, SizeMetric::Cost),
        }
    }

    /// `$min → $max`, or `n/a` when no value is finite.
    #[must_use]
    pub fn format_extent(extent: Option<MetricExtent>) -> String {
        extent.map_or_else(
            || "n/a".to_owned(),
            |extent| {
                format!(
                    "{} → {}",
                    format_currency(extent.min),
                    format_currency(extent.max)
                )
            },
        )
    }
}

/// Legend line listing lifecycle stages early to late.
#[must_use]
pub fn lifecycle_legend() -> String {
    Lifecycle::known()
        .map(|stage| stage.to_string())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Legend line pairing each effort glyph with its level.
#[must_use]
pub fn effort_legend() -> String {
    Effort::known()
        .map(|effort| format!("{} {effort}", effort_glyph(&effort)))
        .collect::<Vec<_>>()
        .join(" · ")
}
