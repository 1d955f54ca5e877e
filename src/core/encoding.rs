use std::f64::consts::PI;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use super::record::{Effort, Lifecycle, Record, Risk};
use crate::render::Color;

/// Bubble area bounds in px² before the user multiplier is applied.
pub const BASE_MIN_AREA: f64 = 180.0;
pub const BASE_MAX_AREA: f64 = 5200.0;

/// Opacity used when a record's stage or benefit cannot be bucketed.
pub const DEFAULT_OPACITY: f64 = 0.7;

/// Fill for risk labels outside the fixed table.
pub const FALLBACK_RISK_COLOR: Color = Color::from_rgb_hex(0x94a3b8);

/// Benefit thresholds (exclusive upper bounds) and their opacities.
pub const BENEFIT_OPACITY_BUCKETS: [(f64, f64); 4] = [
    (100_000.0, 0.30),
    (200_000.0, 0.40),
    (500_000.0, 0.50),
    (1_000_000.0, 0.75),
];
pub const TOP_BENEFIT_OPACITY: f64 = 0.85;

/// Smallest font used for the effort glyph; larger bubbles scale it up.
pub const MIN_GLYPH_FONT_SIZE_PX: f64 = 12.0;
const GLYPH_FONT_RADIUS_RATIO: f64 = 1.6;

/// Record field that drives bubble area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMetric {
    #[default]
    Benefits,
    Cost,
}

impl SizeMetric {
    /// Metric value; a missing cost reads as `NaN`.
    #[must_use]
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Self::Benefits => record.benefits,
            Self::Cost => record.cost.unwrap_or(f64::NAN),
        }
    }
}

/// Which record attribute drives bubble opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpacityPolicy {
    /// Fixed lookup by lifecycle stage, lighter early and darker late.
    #[default]
    Lifecycle,
    /// Bucketed lookup by benefit magnitude.
    BenefitBuckets,
}

impl OpacityPolicy {
    #[must_use]
    pub fn opacity(self, record: &Record) -> f64 {
        match self {
            Self::Lifecycle => lifecycle_opacity(&record.lifecycle),
            Self::BenefitBuckets => benefit_bucket_opacity(record.benefits),
        }
    }
}

#[must_use]
pub fn lifecycle_opacity(stage: &Lifecycle) -> f64 {
    match stage {
        Lifecycle::Discovery => 0.35,
        Lifecycle::Pilot => 0.5,
        Lifecycle::Build => 0.65,
        Lifecycle::Launch => 0.8,
        Lifecycle::Operate => 1.0,
        Lifecycle::Other(_) => DEFAULT_OPACITY,
    }
}

#[must_use]
pub fn benefit_bucket_opacity(benefit: f64) -> f64 {
    if benefit.is_nan() {
        return DEFAULT_OPACITY;
    }
    BENEFIT_OPACITY_BUCKETS
        .iter()
        .find(|(upper, _)| benefit < *upper)
        .map_or(TOP_BENEFIT_OPACITY, |(_, opacity)| *opacity)
}

#[must_use]
pub fn risk_color(risk: &Risk) -> Color {
    match risk {
        Risk::OnTrack => Color::from_rgb_hex(0x16a34a),
        Risk::SomeRisk => Color::from_rgb_hex(0xeab308),
        Risk::HighRisk => Color::from_rgb_hex(0xdc2626),
        Risk::RiskUnknown => Color::from_rgb_hex(0x3b82f6),
        Risk::Other(_) => FALLBACK_RISK_COLOR,
    }
}

/// Three-way glyph mapping; unrecognized effort reads as medium.
#[must_use]
pub fn effort_glyph(effort: &Effort) -> char {
    match effort {
        Effort::Low => '◯',
        Effort::High => '●',
        Effort::Medium | Effort::Other(_) => '◐',
    }
}

/// Per-level glyph visibility. Display only, never filters records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortVisibility {
    pub low: bool,
    pub medium: bool,
    pub high: bool,
}

impl EffortVisibility {
    /// Unknown effort labels have no toggle and are never shown.
    #[must_use]
    pub fn is_visible(self, effort: &Effort) -> bool {
        match effort {
            Effort::Low => self.low,
            Effort::Medium => self.medium,
            Effort::High => self.high,
            Effort::Other(_) => false,
        }
    }

    pub fn set(&mut self, effort: &Effort, visible: bool) {
        match effort {
            Effort::Low => self.low = visible,
            Effort::Medium => self.medium = visible,
            Effort::High => self.high = visible,
            Effort::Other(_) => {}
        }
    }
}

impl Default for EffortVisibility {
    fn default() -> Self {
        Self {
            low: true,
            medium: true,
            high: true,
        }
    }
}

/// Finite min/max of the size metric across a record list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricExtent {
    pub min: f64,
    pub max: f64,
}

impl MetricExtent {
    /// Folds finite values; `None` when nothing finite is present.
    #[must_use]
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut finite = values.into_iter().filter(|value| value.is_finite());
        let first = OrderedFloat(finite.next()?);
        let (min, max) = finite.fold((first, first), |(min, max), value| {
            let value = OrderedFloat(value);
            (min.min(value), max.max(value))
        });
        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    #[must_use]
    pub fn from_records(records: &[Record], metric: SizeMetric) -> Option<Self> {
        Self::from_values(records.iter().map(|record| metric.value(record)))
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }
}

/// Linear metric-to-area mapping so perceived size tracks the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaScale {
    pub min_area: f64,
    pub max_area: f64,
}

impl AreaScale {
    /// Base bounds multiplied by the user size control.
    #[must_use]
    pub fn scaled(multiplier: f64) -> Self {
        Self {
            min_area: BASE_MIN_AREA * multiplier,
            max_area: BASE_MAX_AREA * multiplier,
        }
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min_area + self.max_area) / 2.0
    }

    /// Interpolated area in px², never negative.
    ///
    /// Falls back to the midpoint for a missing or degenerate extent and for
    /// non-finite values.
    #[must_use]
    pub fn area(self, value: f64, extent: Option<MetricExtent>) -> f64 {
        let area = match extent {
            Some(extent) if !extent.is_degenerate() && value.is_finite() => {
                let t = (value - extent.min) / (extent.max - extent.min);
                self.min_area + t * (self.max_area - self.min_area)
            }
            _ => self.midpoint(),
        };
        area.max(0.0)
    }
}

impl Default for AreaScale {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

#[must_use]
pub fn radius_from_area(area: f64) -> f64 {
    (area.max(0.0) / PI).sqrt()
}

#[must_use]
pub fn glyph_font_size(radius: f64) -> f64 {
    (radius * GLYPH_FONT_RADIUS_RATIO).max(MIN_GLYPH_FONT_SIZE_PX)
}

/// Global inputs shared by every per-record encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingContext {
    pub size_metric: SizeMetric,
    pub opacity_policy: OpacityPolicy,
    pub area_scale: AreaScale,
    pub extent: Option<MetricExtent>,
    pub effort_visibility: EffortVisibility,
}

impl EncodingContext {
    /// Context whose extent spans `records` (the full list, not the filtered view).
    #[must_use]
    pub fn for_records(
        records: &[Record],
        size_metric: SizeMetric,
        opacity_policy: OpacityPolicy,
        size_multiplier: f64,
        effort_visibility: EffortVisibility,
    ) -> Self {
        Self {
            size_metric,
            opacity_policy,
            area_scale: AreaScale::scaled(size_multiplier),
            extent: MetricExtent::from_records(records, size_metric),
            effort_visibility,
        }
    }
}

/// Position-independent visual attributes of one bubble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualEncoding {
    pub area: f64,
    pub radius: f64,
    pub fill: Color,
    pub opacity: f64,
    pub glyph: Option<char>,
    pub glyph_font_size: f64,
}

/// Projects one record into its visual encoding.
#[must_use]
pub fn encode_record(record: &Record, context: &EncodingContext) -> VisualEncoding {
    let area = context
        .area_scale
        .area(context.size_metric.value(record), context.extent);
    let radius = radius_from_area(area);
    let glyph = context
        .effort_visibility
        .is_visible(&record.effort)
        .then(|| effort_glyph(&record.effort));
    VisualEncoding {
        area,
        radius,
        fill: risk_color(&record.risk),
        opacity: context.opacity_policy.opacity(record),
        glyph,
        glyph_font_size: glyph_font_size(radius),
    }
}

/// Encodes a batch of records, in input order.
#[must_use]
pub fn encode_records(records: &[&Record], context: &EncodingContext) -> Vec<VisualEncoding> {
    #[cfg(feature = "parallel-projection")]
    {
        records
            .par_iter()
            .map(|record| encode_record(record, context))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records
            .iter()
            .map(|record| encode_record(record, context))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricExtent, benefit_bucket_opacity};

    #[test]
    fn extent_skips_non_finite_values() {
        let extent = MetricExtent::from_values([f64::NAN, 5.0, 2.0, f64::INFINITY, 9.0])
            .expect("finite values present");
        assert_eq!(extent.min, 2.0);
        assert_eq!(extent.max, 9.0);
        assert!(MetricExtent::from_values([f64::NAN]).is_none());
    }

    #[test]
    fn bucket_edges_are_exclusive_upper_bounds() {
        assert_eq!(benefit_bucket_opacity(199_999.0), 0.40);
        assert_eq!(benefit_bucket_opacity(200_000.0), 0.50);
        assert_eq!(benefit_bucket_opacity(999_999.0), 0.75);
        assert_eq!(benefit_bucket_opacity(1_000_000.0), 0.85);
    }
}
