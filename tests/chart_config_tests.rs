use approx::assert_abs_diff_eq;
use bubble_chart_rs::api::SizeMultiplierRange;
use bubble_chart_rs::core::{
    AxisWidthPolicy, CapabilityCatalog, CapabilityGroup, Margins, OpacityPolicy, SizeMetric,
};
use bubble_chart_rs::{ChartConfig, ChartError, ViewState};

#[test]
fn presets_differ_only_where_expected() {
    let collapsible = ChartConfig::collapsible();
    assert_eq!(collapsible, ChartConfig::default());
    assert!(collapsible.collapsible_groups);
    assert_eq!(collapsible.size_metric, SizeMetric::Benefits);
    assert_eq!(collapsible.opacity_policy, OpacityPolicy::Lifecycle);
    assert_eq!(collapsible.catalog.capability_count(), 28);

    let wide = ChartConfig::wide_labels();
    assert_eq!(wide.size_metric, SizeMetric::Cost);
    assert_eq!(wide.opacity_policy, OpacityPolicy::BenefitBuckets);
    assert_eq!(wide.catalog, CapabilityCatalog::compact());
    assert_eq!(wide.margins, Margins::new(40.0, 40.0, 240.0, 180.0));
    assert_eq!(wide.axis_width_policy, AxisWidthPolicy::adaptive(100.0, 70.0));

    let fixed = ChartConfig::large_fixed();
    assert!(!fixed.collapsible_groups);
    assert_eq!(fixed.axis_width_policy, AxisWidthPolicy::Fill { min_step: 120.0 });
    assert!(fixed.jitter.is_some());

    for config in [collapsible, wide, fixed] {
        config.validate().expect("preset is valid");
    }
}

#[test]
fn empty_json_object_yields_collapsible_preset() {
    let config = ChartConfig::from_json_str("{}").expect("parse config");
    assert_eq!(config, ChartConfig::collapsible());
}

#[test]
fn json_round_trip_keeps_structure() {
    let config = ChartConfig::wide_labels()
        .with_jitter(None)
        .with_group_band_min_width(40.0);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed.catalog, config.catalog);
    assert_eq!(parsed.margins, config.margins);
    assert_eq!(parsed.size_metric, SizeMetric::Cost);
    assert_eq!(parsed.opacity_policy, OpacityPolicy::BenefitBuckets);
    assert_eq!(parsed.axis_width_policy, config.axis_width_policy);
    assert_eq!(parsed.jitter, None);
    assert_abs_diff_eq!(parsed.group_band_min_width, 40.0);
    assert_eq!(parsed.render_style.axis_title, config.render_style.axis_title);
}

#[test]
fn invalid_configs_are_rejected() {
    let negative_margin =
        ChartConfig::collapsible().with_margins(Margins::new(-1.0, 24.0, 240.0, 180.0));
    assert!(matches!(
        negative_margin.validate(),
        Err(ChartError::InvalidData(_))
    ));

    let duplicate = CapabilityCatalog::new(vec![
        CapabilityGroup::new("A", ["x", "y"]),
        CapabilityGroup::new("B", ["y"]),
    ]);
    assert!(duplicate.is_err());

    let bad_range = ChartConfig::collapsible().with_size_multiplier_range(SizeMultiplierRange {
        min: 2.0,
        max: 1.0,
        step: 0.1,
    });
    assert!(bad_range.validate().is_err());

    let json = r#"{"group_band_min_width": -3}"#;
    assert!(ChartConfig::from_json_str(json).is_err());
    assert!(ChartConfig::from_json_str("not json").is_err());
}

#[test]
fn size_multiplier_is_clamped_to_range() {
    let range = SizeMultiplierRange::default();
    assert_abs_diff_eq!(range.clamp(0.1), 0.6);
    assert_abs_diff_eq!(range.clamp(3.0), 1.6);
    assert_abs_diff_eq!(range.clamp(1.2), 1.2);
    assert_abs_diff_eq!(range.clamp(f64::NAN), 1.0);
}

#[test]
fn view_state_defaults_show_everything() {
    let view: ViewState = serde_json::from_str("{}").expect("parse view");
    assert_eq!(view, ViewState::default());
    assert_abs_diff_eq!(view.size_multiplier, 1.0);
    assert!(!view.show_labels);
    assert_eq!(view.collapse.collapsed_count(), 0);
}
