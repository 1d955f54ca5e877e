use bubble_chart_rs::api::{RecordEditor, RecordField, default_record, records_from_json_str};
use bubble_chart_rs::core::{
    CapabilityCatalog, Effort, Lifecycle, Record, Risk, SizeMetric, ValueDriver, seed,
};
use bubble_chart_rs::{BubbleChart, ChartConfig, ChartError};
use bubble_chart_rs::render::NullRenderer;

fn editor() -> RecordEditor {
    let catalog = CapabilityCatalog::grouped_default();
    RecordEditor::new(
        seed::benefit_sized_records(),
        default_record(&catalog, SizeMetric::Benefits),
    )
}

#[test]
fn add_default_appends_template_row() {
    let mut editor = editor();
    let before = editor.len();
    let index = editor.add_default();
    assert_eq!(index, before);

    let added = &editor.records()[index];
    assert_eq!(added.name, "New Use Case");
    assert_eq!(added.capability, "Data Mining");
    assert_eq!(added.value_driver, ValueDriver::OpportunityMapping);
    assert_eq!(added.benefits, 100_000.0);
    assert_eq!(added.cost, None);
    assert_eq!(added.lifecycle, Lifecycle::Discovery);
    assert_eq!(added.risk, Risk::OnTrack);
    assert_eq!(added.effort, Effort::Medium);
}

#[test]
fn numeric_cells_coerce_like_form_fields() {
    let mut editor = editor();
    editor
        .update_field(0, RecordField::Benefits, "")
        .expect("blank benefits");
    assert_eq!(editor.records()[0].benefits, 0.0);

    editor
        .update_field(0, RecordField::Benefits, "lots")
        .expect("junk benefits");
    assert!(editor.records()[0].benefits.is_nan());

    editor
        .update_field(0, RecordField::Cost, " 42000 ")
        .expect("cost");
    assert_eq!(editor.records()[0].cost, Some(42_000.0));
}

#[test]
fn label_cells_keep_unknown_text() {
    let mut editor = editor();
    editor
        .update_field(1, RecordField::Risk, "Doomed")
        .expect("risk edit");
    editor
        .update_field(1, RecordField::ValueDriver, "Plan Implementation")
        .expect("driver edit");
    let record = &editor.records()[1];
    assert_eq!(record.risk, Risk::parse("Doomed"));
    assert!(!record.risk.is_known());
    assert_eq!(record.value_driver, ValueDriver::PlanImplementation);
}

#[test]
fn delete_removes_exactly_one_row() {
    let mut editor = editor();
    let second = editor.records()[1].clone();
    let removed = editor.delete(0).expect("delete first");
    assert_ne!(removed, second);
    assert_eq!(editor.records()[0], second);

    let len = editor.len();
    let err = editor.delete(len).expect_err("past the end");
    assert!(matches!(
        err,
        ChartError::RecordIndexOutOfBounds { index, len: l } if index == len && l == len
    ));
}

#[test]
fn non_array_import_is_rejected_and_data_is_untouched() {
    let mut editor = editor();
    let before = editor.records().to_vec();

    let err = editor.import_json("{}").expect_err("object is not a record list");
    assert!(matches!(err, ChartError::Import(_)));
    assert_eq!(editor.records(), before.as_slice());

    let err = editor.import_json("[{").expect_err("broken json");
    assert!(matches!(err, ChartError::Import(_)));
    assert_eq!(editor.records(), before.as_slice());
}

#[test]
fn import_accepts_lenient_values_and_export_reads_back() {
    let mut editor = editor();
    let json = r#"[
        {"name":"A","capability":"Data Mining","valueDriver":"Insight Generation",
         "benefits":"12","lifecycle":"Pilot","risk":"On Track","effort":"Low"},
        {"name":"C","capability":"Data Mining","valueDriver":"Insight Generation",
         "benefits":"junk","cost":"10","lifecycle":"Pilot","risk":"On Track","effort":"Low"},
        {"name":"B","capability":"Nope","valueDriver":"Made Up",
         "benefits":5,"cost":7,"lifecycle":"Build","risk":"Some Risk","effort":"High"}
    ]"#;
    assert_eq!(editor.import_json(json).expect("import"), 3);
    assert_eq!(editor.records()[0].benefits, 12.0);
    assert!(editor.records()[1].benefits.is_nan());
    assert_eq!(editor.records()[1].cost, Some(10.0));
    assert_eq!(editor.records()[2].cost, Some(7.0));
    assert_eq!(editor.records()[2].value_driver, ValueDriver::parse("Made Up"));

    let exported = editor.export_json().expect("export");
    assert!(exported.contains("\"valueDriver\": \"Made Up\""));
    let reread = records_from_json_str(&exported).expect("re-import");
    assert_eq!(reread[2], editor.records()[2]);
    assert_eq!(reread[0], editor.records()[0]);
    assert!(reread[1].benefits.is_nan());
}

#[test]
fn junk_cost_survives_export_and_reimport() {
    let catalog = CapabilityCatalog::grouped_default();
    let mut editor = RecordEditor::new(
        seed::cost_sized_records(),
        default_record(&catalog, SizeMetric::Cost),
    );
    editor
        .update_field(0, RecordField::Cost, "n/a")
        .expect("junk cost");
    assert!(editor.records()[0].cost.is_some_and(f64::is_nan));

    let exported = editor.export_json().expect("export");
    let reread = records_from_json_str(&exported).expect("re-import");
    assert!(reread[0].cost.is_some_and(f64::is_nan));
    assert_eq!(reread[1].cost, editor.records()[1].cost);
}

#[test]
fn export_omits_missing_cost() {
    let record = Record::new(
        "Lean",
        "Data Mining",
        ValueDriver::InsightGeneration,
        1.0,
        Lifecycle::Pilot,
        Risk::OnTrack,
        Effort::Low,
    );
    let catalog = CapabilityCatalog::grouped_default();
    let editor = RecordEditor::new(vec![record], default_record(&catalog, SizeMetric::Benefits));
    let exported = editor.export_json().expect("export");
    assert!(!exported.contains("cost"));
    assert!(exported.trim_start().starts_with('['));
}

#[test]
fn engine_import_failure_reports_one_error_and_keeps_layout() {
    let mut chart = BubbleChart::new(
        NullRenderer::default(),
        ChartConfig::collapsible(),
        seed::benefit_sized_records(),
    )
    .expect("chart init");
    let before = chart.records().to_vec();
    let placed = chart.layout().points.len();

    assert!(chart.import_json("{}").is_err());
    assert_eq!(chart.records(), before.as_slice());
    assert_eq!(chart.layout().points.len(), placed);
}

#[test]
fn cost_sized_chart_adds_rows_with_cost() {
    let mut chart = BubbleChart::new(
        NullRenderer::default(),
        ChartConfig::wide_labels(),
        seed::cost_sized_records(),
    )
    .expect("chart init");
    let index = chart.add_default_record().expect("add row");
    let added = &chart.records()[index];
    assert_eq!(added.cost, Some(100_000.0));
    assert_eq!(added.capability, "Segmentation");
}
