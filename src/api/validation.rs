use crate::core::{CapabilityCatalog, Record, SizeMetric};

/// Human-readable problems with the record list, one line per issue.
///
/// Rows are numbered from 1. Issues never block rendering; records with an
/// unknown capability or value driver are simply not placed.
#[must_use]
pub fn validate_records(
    records: &[Record],
    catalog: &CapabilityCatalog,
    size_metric: SizeMetric,
) -> Vec<String> {
    let mut issues = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        if !catalog.contains(&record.capability) {
            issues.push(format!(
                "Row {row}: invalid capability → {}",
                record.capability
            ));
        }
        if !record.value_driver.is_known() {
            issues.push(format!(
                "Row {row}: invalid valueDriver → {}",
                record.value_driver
            ));
        }
        push_number_issues(&mut issues, row, "benefits", Some(record.benefits));
        if size_metric == SizeMetric::Cost {
            push_number_issues(&mut issues, row, "cost", record.cost);
        }
        if !record.lifecycle.is_known() {
            issues.push(format!(
                "Row {row}: invalid lifecycle → {}",
                record.lifecycle
            ));
        }
        if !record.risk.is_known() {
            issues.push(format!("Row {row}: invalid risk → {}", record.risk));
        }
        if !record.effort.is_known() {
            issues.push(format!("Row {row}: invalid effort → {}", record.effort));
        }
    }
    issues
}

fn push_number_issues(issues: &mut Vec<String>, row: usize, field: &str, value: Option<f64>) {
    match value {
        Some(value) if !value.is_nan() => {
            if value < 0.0 {
                issues.push(format!("Row {row}: {field} should be ≥ 0"));
            }
        }
        _ => issues.push(format!("Row {row}: {field} must be a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_records;
    use crate::core::{
        CapabilityCatalog, Effort, Lifecycle, Record, Risk, SizeMetric, ValueDriver,
    };

    fn record() -> Record {
        Record::new(
            "Row",
            "Data Analysis",
            ValueDriver::InsightGeneration,
            10.0,
            Lifecycle::Pilot,
            Risk::OnTrack,
            Effort::Low,
        )
    }

    #[test]
    fn cost_is_checked_only_when_it_sizes_bubbles() {
        let catalog = CapabilityCatalog::grouped_default();
        let records = [record()];
        assert!(validate_records(&records, &catalog, SizeMetric::Benefits).is_empty());
        assert_eq!(
            validate_records(&records, &catalog, SizeMetric::Cost),
            vec!["Row 1: cost must be a number".to_owned()]
        );
    }

    #[test]
    fn negative_and_nan_numbers_get_distinct_messages() {
        let catalog = CapabilityCatalog::grouped_default();
        let mut negative = record();
        negative.benefits = -1.0;
        let mut nan = record();
        nan.benefits = f64::NAN;
        assert_eq!(
            validate_records(&[negative, nan], &catalog, SizeMetric::Benefits),
            vec![
                "Row 1: benefits should be ≥ 0".to_owned(),
                "Row 2: benefits must be a number".to_owned(),
            ]
        );
    }
}
