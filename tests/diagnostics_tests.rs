use bubble_chart_rs::api::{
    ChartSummary, effort_legend, lifecycle_legend, run_self_checks, validate_records,
};
use bubble_chart_rs::api::RecordField;
use bubble_chart_rs::core::{CapabilityCatalog, SizeMetric, seed};
use bubble_chart_rs::render::NullRenderer;
use bubble_chart_rs::{BubbleChart, ChartConfig};

fn seed_chart() -> BubbleChart<NullRenderer> {
    BubbleChart::new(
        NullRenderer::default(),
        ChartConfig::collapsible(),
        seed::benefit_sized_records(),
    )
    .expect("chart init")
}

#[test]
fn seed_chart_passes_every_self_check() {
    let chart = seed_chart();
    let checks = chart.self_checks();
    assert_eq!(checks.len(), 12);
    let failing: Vec<&str> = checks
        .iter()
        .filter(|check| !check.pass)
        .map(|check| check.name.as_str())
        .collect();
    assert!(failing.is_empty(), "failing checks: {failing:?}");
    assert!(checks.iter().any(|check| check.name == "benefits extent sane"));
    assert!(chart.validation_issues().is_empty());
}

#[test]
fn cost_sized_seed_is_clean_for_its_catalog() {
    let chart = BubbleChart::new(
        NullRenderer::default(),
        ChartConfig::wide_labels(),
        seed::cost_sized_records(),
    )
    .expect("chart init");
    assert!(chart.validation_issues().is_empty());
    assert!(chart.self_checks().iter().all(|check| check.pass));
    assert!(
        chart
            .self_checks()
            .iter()
            .any(|check| check.name == "cost extent sane")
    );
}

fn area_check_passes(checks: &[bubble_chart_rs::api::SelfCheck]) -> bool {
    checks
        .iter()
        .find(|check| check.name == "area scale monotonic")
        .expect("area check")
        .pass
}

#[test]
fn area_check_follows_loaded_records_and_multiplier() {
    let mut chart = seed_chart();
    for multiplier in [0.1, 0.5, 1.0, 2.0, 50.0] {
        chart.set_size_multiplier(multiplier).expect("multiplier");
        assert!(area_check_passes(&chart.self_checks()), "multiplier {multiplier}");
    }

    let mut records = seed::benefit_sized_records();
    records.truncate(1);
    let single = run_self_checks(&records, chart.config(), chart.view(), chart.layout());
    assert!(area_check_passes(&single));

    for record in &mut records {
        record.benefits = f64::NAN;
    }
    let r#unsized = run_self_checks(&records, chart.config(), chart.view(), chart.layout());
    assert!(area_check_passes(&r#unsized));
}

#[test]
fn invalid_capability_fails_row_check_but_still_renders() {
    let mut chart = seed_chart();
    chart
        .update_record_field(0, RecordField::Capability, "Telepathy")
        .expect("edit");

    let issues = chart.validation_issues();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("invalid capability"));
    assert!(issues[0].contains("→ Telepathy"));

    let rows_valid = chart
        .self_checks()
        .into_iter()
        .find(|check| check.name == "all data rows valid")
        .expect("row check");
    assert!(!rows_valid.pass);

    assert_eq!(chart.layout().skipped_points, 1);
    assert_eq!(chart.layout().points.len(), 12);
    chart.render().expect("render with invalid row");
}

#[test]
fn numeric_issues_follow_size_metric() {
    let mut records = seed::benefit_sized_records();
    records[2].benefits = f64::NAN;
    records[3].benefits = -5.0;
    let catalog = CapabilityCatalog::grouped_default();

    let issues = validate_records(&records, &catalog, SizeMetric::Benefits);
    assert_eq!(issues.len(), 2);
    assert!(issues[0].contains("benefits must be a number"));
    assert!(issues[1].contains("benefits should be ≥ 0"));

    let issues = validate_records(&records, &catalog, SizeMetric::Cost);
    assert_eq!(
        issues
            .iter()
            .filter(|issue| issue.contains("cost must be a number"))
            .count(),
        records.len()
    );
}

#[test]
fn summary_reports_visible_count_and_extents() {
    let mut chart = seed_chart();
    chart.set_min_benefit(1_000_000.0).expect("filter");
    let summary: ChartSummary = chart.summary();
    assert_eq!(summary.visible_count, chart.layout().visible_count);
    assert!(summary.visible_count < chart.records().len());
    assert!(summary.benefits_extent.is_some());
    assert_eq!(summary.cost_extent, None);
    assert_eq!(
        ChartSummary::format_extent(summary.cost_extent),
        "n/a"
    );

    assert_eq!(lifecycle_legend(), "Discovery · Pilot · Build · Launch · Operate");
    assert_eq!(effort_legend(), "◯ Low · ◐ Medium · ● High");
}
