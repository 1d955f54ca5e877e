use approx::assert_abs_diff_eq;
use bubble_chart_rs::core::{
    CategoryFilter, Effort, FilterState, JitterConfig, JitterOffset, Lifecycle, Record, Risk,
    ValueDriver, filter_records, jitter_offsets, spiral_offset,
};

fn record(name: &str, capability: &str, driver: ValueDriver, benefits: f64, risk: Risk) -> Record {
    Record::new(
        name,
        capability,
        driver,
        benefits,
        Lifecycle::Pilot,
        risk,
        Effort::Medium,
    )
}

#[test]
fn lone_point_is_not_displaced() {
    let records = [record(
        "solo",
        "Data Mining",
        ValueDriver::InsightGeneration,
        1.0,
        Risk::OnTrack,
    )];
    let refs: Vec<&Record> = records.iter().collect();
    assert_eq!(
        jitter_offsets(&refs, JitterConfig::default()),
        vec![JitterOffset::ZERO]
    );
}

#[test]
fn crowded_cell_spreads_on_a_bounded_spiral() {
    let records: Vec<Record> = (0..40)
        .map(|i| {
            record(
                &format!("r{i}"),
                "Segmentation",
                ValueDriver::OpportunityMapping,
                1.0,
                Risk::OnTrack,
            )
        })
        .collect();
    let refs: Vec<&Record> = records.iter().collect();
    let offsets = jitter_offsets(&refs, JitterConfig::default());

    assert_eq!(offsets.len(), 40);
    assert!(offsets.iter().all(|offset| offset.magnitude() <= 16.0 + 1e-9));
    assert_abs_diff_eq!(offsets[0].dy, 0.0);
    assert_abs_diff_eq!(offsets[0].dx, 10.0 * (1.0_f64 / 40.0).sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(offsets[39].magnitude(), 10.0, epsilon = 1e-12);
}

#[test]
fn offsets_follow_input_order_across_cells() {
    let records = [
        record("a1", "Data Mining", ValueDriver::InsightGeneration, 1.0, Risk::OnTrack),
        record("b1", "Data Analysis", ValueDriver::InsightGeneration, 1.0, Risk::OnTrack),
        record("a2", "Data Mining", ValueDriver::InsightGeneration, 1.0, Risk::OnTrack),
    ];
    let refs: Vec<&Record> = records.iter().collect();
    let config = JitterConfig::default();
    let offsets = jitter_offsets(&refs, config);

    assert_eq!(offsets[0], spiral_offset(0, 2, config));
    assert_eq!(offsets[1], JitterOffset::ZERO);
    assert_eq!(offsets[2], spiral_offset(1, 2, config));
}

#[test]
fn spiral_radius_is_capped() {
    let config = JitterConfig {
        base_px: 40.0,
        max_px: 16.0,
    };
    for index in 0..5 {
        assert!(spiral_offset(index, 5, config).magnitude() <= 16.0 + 1e-9);
    }
}

fn portfolio() -> Vec<Record> {
    vec![
        record("one", "Data Mining", ValueDriver::InsightGeneration, 50_000.0, Risk::OnTrack),
        record("two", "Segmentation", ValueDriver::OpportunityMapping, 250_000.0, Risk::HighRisk),
        record("three", "Data Mining", ValueDriver::PlanImplementation, 100_000.0, Risk::OnTrack),
        record("four", "Personalization", ValueDriver::InsightGeneration, 900_000.0, Risk::SomeRisk),
        record("five", "Data Mining", ValueDriver::InsightGeneration, 120_000.0, Risk::parse("Unrated")),
        record("six", "Risk Scoring", ValueDriver::InsightGeneration, 300_000.0, Risk::OnTrack),
    ]
}

#[test]
fn only_on_track_survives_when_other_risks_are_disabled() {
    let records = portfolio();
    let mut filters = FilterState::default();
    for risk in [Risk::SomeRisk, Risk::HighRisk, Risk::RiskUnknown] {
        filters.set_risk_enabled(risk, false);
    }

    let visible = filter_records(&records, &filters);
    let names: Vec<&str> = visible.iter().map(|(_, r)| r.name.as_str()).collect();
    assert_eq!(names, vec!["one", "three", "six"]);
    assert!(visible.iter().all(|(_, r)| r.risk == Risk::OnTrack));
}

#[test]
fn min_benefit_keeps_survivors_in_original_order() {
    let records = portfolio();
    let filters = FilterState {
        min_benefit: 100_000.0,
        ..FilterState::default()
    };

    let indices: Vec<usize> = filter_records(&records, &filters)
        .into_iter()
        .map(|(index, _)| index)
        .collect();
    assert_eq!(indices, vec![1, 2, 3, 5]);
}

#[test]
fn category_filters_combine_with_and() {
    let records = portfolio();
    let filters = FilterState {
        capability: CategoryFilter::Only("Data Mining".to_owned()),
        value_driver: CategoryFilter::Only(ValueDriver::InsightGeneration),
        ..FilterState::default()
    };
    let visible = filter_records(&records, &filters);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].1.name, "one");
}

#[test]
fn unparsable_benefit_never_passes() {
    let mut records = portfolio();
    records[0].benefits = f64::NAN;
    let visible = filter_records(&records, &FilterState::default());
    assert!(visible.iter().all(|(index, _)| *index != 0));
}
