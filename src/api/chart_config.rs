use serde::{Deserialize, Serialize};

use crate::core::{
    AxisWidthPolicy, CapabilityCatalog, JitterConfig, Margins, OpacityPolicy, SizeMetric,
};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;
use super::render_style::validate_render_style;

/// Inclusive bounds and slider increment for the bubble-size multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeMultiplierRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SizeMultiplierRange {
    #[must_use]
    pub fn clamp(self, multiplier: f64) -> f64 {
        if multiplier.is_nan() {
            return 1.0_f64.clamp(self.min, self.max);
        }
        multiplier.clamp(self.min, self.max)
    }

    pub fn validate(self) -> ChartResult<()> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || self.min <= 0.0 || self.min > self.max || self.step <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "size multiplier range must satisfy 0 < min <= max with step > 0 (got {}..={} step {})",
                self.min, self.max, self.step
            )));
        }
        Ok(())
    }
}

impl Default for SizeMultiplierRange {
    fn default() -> Self {
        Self {
            min: 0.6,
            max: 1.6,
            step: 0.1,
        }
    }
}

/// Static chart setup: catalog, margins, encoding choices, and style.
///
/// Serializable so hosts can persist a chart definition next to its data.
/// Per-session toggles (filters, collapse, size multiplier) live in
/// [`super::ViewState`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub catalog: CapabilityCatalog,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub size_metric: SizeMetric,
    #[serde(default)]
    pub opacity_policy: OpacityPolicy,
    #[serde(default)]
    pub axis_width_policy: AxisWidthPolicy,
    #[serde(default = "default_jitter")]
    pub jitter: Option<JitterConfig>,
    #[serde(default = "default_collapsible_groups")]
    pub collapsible_groups: bool,
    /// Minimum drawn width for a group band; collapsed groups span zero px.
    #[serde(default)]
    pub group_band_min_width: f64,
    #[serde(default)]
    pub size_multiplier_range: SizeMultiplierRange,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::collapsible()
    }
}

impl ChartConfig {
    /// Grouped catalog with click-to-collapse groups, sized by benefits and
    /// shaded by lifecycle.
    #[must_use]
    pub fn collapsible() -> Self {
        Self {
            catalog: CapabilityCatalog::grouped_default(),
            margins: Margins::default(),
            size_metric: SizeMetric::Benefits,
            opacity_policy: OpacityPolicy::Lifecycle,
            axis_width_policy: AxisWidthPolicy::adaptive(90.0, 60.0),
            jitter: default_jitter(),
            collapsible_groups: default_collapsible_groups(),
            group_band_min_width: 0.0,
            size_multiplier_range: SizeMultiplierRange::default(),
            render_style: RenderStyle::default(),
        }
    }

    /// Compact catalog with roomier label spacing, sized by cost and shaded
    /// by benefit bucket.
    #[must_use]
    pub fn wide_labels() -> Self {
        Self {
            catalog: CapabilityCatalog::compact(),
            margins: Margins::new(40.0, 40.0, 240.0, 180.0),
            size_metric: SizeMetric::Cost,
            opacity_policy: OpacityPolicy::BenefitBuckets,
            axis_width_policy: AxisWidthPolicy::adaptive(100.0, 70.0),
            ..Self::collapsible()
        }
    }

    /// Every capability always visible; the axis fills the plot area with a
    /// 120 px floor per tick.
    #[must_use]
    pub fn large_fixed() -> Self {
        Self {
            axis_width_policy: AxisWidthPolicy::Fill { min_step: 120.0 },
            collapsible_groups: false,
            ..Self::collapsible()
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CapabilityCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_size_metric(mut self, metric: SizeMetric) -> Self {
        self.size_metric = metric;
        self
    }

    #[must_use]
    pub fn with_opacity_policy(mut self, policy: OpacityPolicy) -> Self {
        self.opacity_policy = policy;
        self
    }

    #[must_use]
    pub fn with_axis_width_policy(mut self, policy: AxisWidthPolicy) -> Self {
        self.axis_width_policy = policy;
        self
    }

    /// `None` disables overlap jitter entirely.
    #[must_use]
    pub fn with_jitter(mut self, jitter: Option<JitterConfig>) -> Self {
        self.jitter = jitter;
        self
    }

    #[must_use]
    pub fn with_collapsible_groups(mut self, collapsible: bool) -> Self {
        self.collapsible_groups = collapsible;
        self
    }

    #[must_use]
    pub fn with_group_band_min_width(mut self, min_width: f64) -> Self {
        self.group_band_min_width = min_width;
        self
    }

    #[must_use]
    pub fn with_size_multiplier_range(mut self, range: SizeMultiplierRange) -> Self {
        self.size_multiplier_range = range;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.catalog.validate()?;
        self.margins.validate()?;
        if !self.axis_width_policy.is_valid() {
            return Err(ChartError::InvalidData(
                "axis width policy steps must be finite and > 0".to_owned(),
            ));
        }
        if let Some(jitter) = self.jitter {
            if !jitter.base_px.is_finite()
                || !jitter.max_px.is_finite()
                || jitter.base_px < 0.0
                || jitter.max_px < 0.0
            {
                return Err(ChartError::InvalidData(
                    "jitter radii must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.group_band_min_width.is_finite() || self.group_band_min_width < 0.0 {
            return Err(ChartError::InvalidData(
                "group band min width must be finite and >= 0".to_owned(),
            ));
        }
        self.size_multiplier_range.validate()?;
        validate_render_style(&self.render_style)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_jitter() -> Option<JitterConfig> {
    Some(JitterConfig::default())
}

fn default_collapsible_groups() -> bool {
    true
}
