use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    CapabilityCatalog, Effort, Lifecycle, Record, Risk, SizeMetric, ValueDriver, coerce_number,
};
use crate::error::{ChartError, ChartResult};

use super::json_contract::{records_from_json_str, records_to_json_pretty};

/// Name given to rows created with [`RecordEditor::add_default`].
pub const NEW_RECORD_NAME: &str = "New Use Case";
/// Seed amount for the numeric fields of a new row.
pub const NEW_RECORD_AMOUNT: f64 = 100_000.0;

/// Editable column of a record row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Name,
    Capability,
    ValueDriver,
    Benefits,
    Cost,
    Lifecycle,
    Risk,
    Effort,
}

impl RecordField {
    /// Looks a column up by its JSON key (`valueDriver`, `benefits`, ...).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "name" => Self::Name,
            "capability" => Self::Capability,
            "valueDriver" => Self::ValueDriver,
            "benefits" => Self::Benefits,
            "cost" => Self::Cost,
            "lifecycle" => Self::Lifecycle,
            "risk" => Self::Risk,
            "effort" => Self::Effort,
            _ => return None,
        })
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Benefits | Self::Cost)
    }
}

/// Row template used for new records.
#[must_use]
pub fn default_record(catalog: &CapabilityCatalog, size_metric: SizeMetric) -> Record {
    let record = Record::new(
        NEW_RECORD_NAME,
        catalog.first_capability().unwrap_or_default(),
        ValueDriver::OpportunityMapping,
        NEW_RECORD_AMOUNT,
        Lifecycle::Discovery,
        Risk::OnTrack,
        Effort::Medium,
    );
    match size_metric {
        SizeMetric::Cost => record.with_cost(NEW_RECORD_AMOUNT),
        SizeMetric::Benefits => record,
    }
}

/// Owns the record list and applies table-style edits to it.
///
/// Every mutation swaps in a freshly built list, so a failed edit or import
/// leaves the previous list intact.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEditor {
    records: Vec<Record>,
    template: Record,
}

impl RecordEditor {
    #[must_use]
    pub fn new(records: Vec<Record>, template: Record) -> Self {
        Self { records, template }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn template(&self) -> &Record {
        &self.template
    }

    pub fn set_template(&mut self, template: Record) {
        self.template = template;
    }

    pub fn replace_all(&mut self, records: Vec<Record>) {
        debug!(
            previous = self.records.len(),
            next = records.len(),
            "replacing record list"
        );
        self.records = records;
    }

    /// Appends a copy of the template and returns its index.
    pub fn add_default(&mut self) -> usize {
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(self.template.clone());
        self.records = next;
        self.records.len() - 1
    }

    /// Writes one cell from its text form.
    ///
    /// Numeric columns use form-field coercion (blank is `0`, junk is `NaN`);
    /// label columns accept any text, and unknown labels are reported by
    /// validation rather than rejected here.
    pub fn update_field(&mut self, index: usize, field: RecordField, value: &str) -> ChartResult<()> {
        self.check_index(index)?;
        let next = self
            .records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                if row == index {
                    with_field(record, field, value)
                } else {
                    record.clone()
                }
            })
            .collect();
        self.records = next;
        Ok(())
    }

    /// Removes a row and returns it.
    pub fn delete(&mut self, index: usize) -> ChartResult<Record> {
        self.check_index(index)?;
        let mut next = Vec::with_capacity(self.records.len() - 1);
        let mut removed = None;
        for (row, record) in self.records.iter().enumerate() {
            if row == index {
                removed = Some(record.clone());
            } else {
                next.push(record.clone());
            }
        }
        self.records = next;
        removed.ok_or(ChartError::RecordIndexOutOfBounds {
            index,
            len: self.records.len(),
        })
    }

    /// Replaces the list with the records in `text`; returns the new length.
    pub fn import_json(&mut self, text: &str) -> ChartResult<usize> {
        let records = records_from_json_str(text)?;
        self.replace_all(records);
        Ok(self.records.len())
    }

    pub fn export_json(&self) -> ChartResult<String> {
        records_to_json_pretty(&self.records)
    }

    fn check_index(&self, index: usize) -> ChartResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(ChartError::RecordIndexOutOfBounds {
                index,
                len: self.records.len(),
            })
        }
    }
}

fn with_field(record: &Record, field: RecordField, value: &str) -> Record {
    let mut next = record.clone();
    match field {
        RecordField::Name => next.name = value.to_owned(),
        RecordField::Capability => next.capability = value.to_owned(),
        RecordField::ValueDriver => next.value_driver = ValueDriver::parse(value),
        RecordField::Benefits => next.benefits = coerce_number(value),
        RecordField::Cost => next.cost = Some(coerce_number(value)),
        RecordField::Lifecycle => next.lifecycle = Lifecycle::parse(value),
        RecordField::Risk => next.risk = Risk::parse(value),
        RecordField::Effort => next.effort = Effort::parse(value),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::{RecordEditor, RecordField, default_record};
    use crate::core::{CapabilityCatalog, SizeMetric};

    #[test]
    fn template_carries_cost_only_for_cost_sizing() {
        let catalog = CapabilityCatalog::compact();
        assert_eq!(default_record(&catalog, SizeMetric::Benefits).cost, None);
        let record = default_record(&catalog, SizeMetric::Cost);
        assert_eq!(record.cost, Some(100_000.0));
        assert_eq!(Some(record.capability.as_str()), catalog.first_capability());
    }

    #[test]
    fn field_keys_match_json_names() {
        assert_eq!(
            RecordField::from_key("valueDriver"),
            Some(RecordField::ValueDriver)
        );
        assert_eq!(RecordField::from_key("value_driver"), None);
        assert!(RecordField::Cost.is_numeric());
    }

    #[test]
    fn out_of_range_edit_is_an_error() {
        let catalog = CapabilityCatalog::grouped_default();
        let mut editor = RecordEditor::new(Vec::new(), default_record(&catalog, SizeMetric::Benefits));
        assert!(editor.update_field(0, RecordField::Name, "x").is_err());
        assert!(editor.delete(0).is_err());
    }
}
