use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::record::{Record, Risk, ValueDriver};

/// Single-value category filter with an "All" wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> CategoryFilter<T> {
    #[must_use]
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl CategoryFilter<String> {
    /// Capability filters compare against `&str` without allocating.
    #[must_use]
    pub fn accepts_str(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

/// View-only predicate over the record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Risks absent from the map are excluded.
    pub risk_enabled: IndexMap<Risk, bool>,
    pub capability: CategoryFilter<String>,
    pub value_driver: CategoryFilter<ValueDriver>,
    pub min_benefit: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            risk_enabled: Risk::known().map(|risk| (risk, true)).collect(),
            capability: CategoryFilter::All,
            value_driver: CategoryFilter::All,
            min_benefit: 0.0,
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn is_risk_enabled(&self, risk: &Risk) -> bool {
        self.risk_enabled.get(risk).copied().unwrap_or(false)
    }

    pub fn set_risk_enabled(&mut self, risk: Risk, enabled: bool) {
        self.risk_enabled.insert(risk, enabled);
    }

    /// Visible iff risk enabled, both category filters accept, and
    /// `benefits >= min_benefit` (a `NaN` benefit never passes).
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.is_risk_enabled(&record.risk)
            && self.capability.accepts_str(&record.capability)
            && self.value_driver.accepts(&record.value_driver)
            && record.benefits >= self.min_benefit
    }
}

/// Surviving records with their source indices, in original order.
#[must_use]
pub fn filter_records<'a>(records: &'a [Record], filter: &FilterState) -> Vec<(usize, &'a Record)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .collect()
}
