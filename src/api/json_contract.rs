use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Record;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BubbleChart, ChartSnapshot};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshotJsonContractV1<'a> {
    pub schema_version: u32,
    pub snapshot: &'a ChartSnapshot,
}

/// Pretty-printed JSON array in the record exchange shape.
pub fn records_to_json_pretty(records: &[Record]) -> ChartResult<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize records: {e}")))
}

/// Parses a JSON array of records.
///
/// Anything other than an array is rejected as a whole; so is an array with
/// an element that is not a record object. Field values are read leniently
/// so bad labels and numbers surface later as validation issues.
pub fn records_from_json_str(input: &str) -> ChartResult<Vec<Record>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| ChartError::Import(format!("invalid JSON: {e}")))?;
    let Value::Array(items) = value else {
        return Err(ChartError::Import(
            "expected a JSON array of records".to_owned(),
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Record::deserialize(item)
                .map_err(|e| ChartError::Import(format!("record {}: {e}", index + 1)))
        })
        .collect()
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }
}

impl<R: Renderer> BubbleChart<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
