use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::encoding::FALLBACK_RISK_COLOR;
use crate::core::{
    AreaScale, Effort, MetricExtent, Record, Risk, SizeMetric, ValueDriver, effort_glyph,
    risk_color,
};

use super::validation::validate_records;
use super::{ChartConfig, ChartLayout, ViewState};

/// One named pass/fail line of the built-in self-check panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfCheck {
    pub name: String,
    pub pass: bool,
}

impl SelfCheck {
    fn new(name: impl Into<String>, pass: bool) -> Self {
        Self {
            name: name.into(),
            pass,
        }
    }
}

/// Sanity checks over the catalog, tables, record list, and current layout.
///
/// These are informational; a failing check never blocks rendering.
#[must_use]
pub fn run_self_checks(
    records: &[Record],
    config: &ChartConfig,
    view: &ViewState,
    layout: &ChartLayout,
) -> Vec<SelfCheck> {
    let mut checks = Vec::with_capacity(12);

    let mut seen = HashSet::new();
    let capabilities_unique = config
        .catalog
        .capabilities()
        .all(|capability| !capability.is_empty() && seen.insert(capability));
    checks.push(SelfCheck::new("CAPABILITIES are unique", capabilities_unique));

    let drivers: Vec<ValueDriver> = ValueDriver::known().collect();
    let drivers_unique = drivers.iter().collect::<HashSet<_>>().len() == drivers.len()
        && drivers.iter().all(|driver| !driver.as_str().is_empty());
    checks.push(SelfCheck::new("VALUE_DRIVERS are unique", drivers_unique));

    checks.push(SelfCheck::new(
        "x scale step positive",
        layout.x_axis.step() > 0.0,
    ));
    checks.push(SelfCheck::new(
        "y scale step positive",
        layout.y_axis.scale.step() > 0.0,
    ));

    let issues = validate_records(records, &config.catalog, config.size_metric);
    checks.push(SelfCheck::new("all data rows valid", issues.is_empty()));

    let glyphs: Vec<char> = Effort::known().map(|effort| effort_glyph(&effort)).collect();
    let glyphs_distinct = glyphs.iter().collect::<HashSet<_>>().len() == glyphs.len();
    checks.push(SelfCheck::new("effort glyph mapping", glyphs_distinct));

    let scale = AreaScale::scaled(config.size_multiplier_range.clamp(view.size_multiplier));
    let extent = MetricExtent::from_records(records, config.size_metric);
    let area_monotonic = match extent {
        Some(extent) if !extent.is_degenerate() => {
            scale.area(extent.max, Some(extent)) > scale.area(extent.min, Some(extent))
        }
        _ => scale.max_area > scale.min_area && scale.area(f64::NAN, extent) > 0.0,
    };
    checks.push(SelfCheck::new("area scale monotonic", area_monotonic));

    let metric_name = match config.size_metric {
        SizeMetric::Benefits => "benefits",
        SizeMetric::Cost => "cost",
    };
    let extent_sane = MetricExtent::from_records(records, config.size_metric)
        .is_some_and(|extent| extent.min <= extent.max);
    checks.push(SelfCheck::new(
        format!("{metric_name} extent sane"),
        extent_sane,
    ));

    let overlay_keys = Effort::known().all(|effort| {
        let mut toggled = view.effort_visibility;
        toggled.set(&effort, !toggled.is_visible(&effort));
        toggled != view.effort_visibility
    });
    checks.push(SelfCheck::new("effort overlay keys", overlay_keys));

    checks.push(SelfCheck::new(
        "risk color has 'Risk Unknown'",
        risk_color(&Risk::RiskUnknown) != FALLBACK_RISK_COLOR,
    ));

    checks.push(SelfCheck::new(
        "risk filter has all risks",
        Risk::known().all(|risk| view.filters.risk_enabled.contains_key(&risk)),
    ));

    checks.push(SelfCheck::new(
        "visible ticks ≥ 1",
        !layout.x_axis.ticks.is_empty(),
    ));

    checks
}
