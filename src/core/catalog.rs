use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Named bucket of related capabilities shown as one nested X-axis label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityGroup {
    pub name: String,
    pub items: Vec<String>,
}

impl CapabilityGroup {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, capability: &str) -> bool {
        self.items.iter().any(|item| item == capability)
    }
}

/// Ordered partition of every plottable capability into groups.
///
/// Group order, then item order within a group, defines X-axis order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityCatalog {
    groups: Vec<CapabilityGroup>,
}

impl CapabilityCatalog {
    /// Builds a catalog, rejecting empty or overlapping groups.
    pub fn new(groups: Vec<CapabilityGroup>) -> ChartResult<Self> {
        let catalog = Self { groups };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.groups.is_empty() {
            return Err(ChartError::InvalidData(
                "capability catalog must contain at least one group".to_owned(),
            ));
        }

        let mut group_names = HashSet::new();
        let mut capabilities = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(ChartError::InvalidData(
                    "capability group name must not be empty".to_owned(),
                ));
            }
            if !group_names.insert(group.name.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate capability group `{}`",
                    group.name
                )));
            }
            if group.items.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "capability group `{}` must not be empty",
                    group.name
                )));
            }
            for item in &group.items {
                if item.trim().is_empty() {
                    return Err(ChartError::InvalidData(format!(
                        "capability group `{}` contains an empty capability",
                        group.name
                    )));
                }
                if !capabilities.insert(item.as_str()) {
                    return Err(ChartError::InvalidData(format!(
                        "capability `{item}` appears in more than one place"
                    )));
                }
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn groups(&self) -> &[CapabilityGroup] {
        &self.groups
    }

    /// Flattened capability list in axis order.
    pub fn capabilities(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter().map(String::as_str))
    }

    #[must_use]
    pub fn capability_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    #[must_use]
    pub fn contains(&self, capability: &str) -> bool {
        self.groups.iter().any(|group| group.contains(capability))
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&CapabilityGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    #[must_use]
    pub fn group_of(&self, capability: &str) -> Option<&CapabilityGroup> {
        self.groups.iter().find(|group| group.contains(capability))
    }

    #[must_use]
    pub fn first_capability(&self) -> Option<&str> {
        self.capabilities().next()
    }

    /// Eight-group catalog with 28 capabilities.
    #[must_use]
    pub fn grouped_default() -> Self {
        Self {
            groups: vec![
                CapabilityGroup::new(
                    "Data Foundations & Quality",
                    [
                        "Data Mining",
                        "Data Analysis",
                        "Data Flagging",
                        "Data Correction",
                    ],
                ),
                CapabilityGroup::new(
                    "Knowledge & Retrieval",
                    ["Search & Retrieval (RAG)", "Knowledge Base / Q&A"],
                ),
                CapabilityGroup::new(
                    "Language & Multimodal AI",
                    [
                        "Summarization",
                        "Translation/Transcription",
                        "Sentiment Analysis",
                        "Voice/Speech Recognition",
                        "Image/Video Analysis",
                    ],
                ),
                CapabilityGroup::new(
                    "Generative Content & Synthesis",
                    [
                        "Content Creation",
                        "Document Generation",
                        "Synthetic Data Creation",
                    ],
                ),
                CapabilityGroup::new(
                    "Targeting & Personalization",
                    [
                        "Segmentation",
                        "Audience Optimization",
                        "Personalization",
                        "Recommendation Engine",
                        "Offer Presentment",
                    ],
                ),
                CapabilityGroup::new(
                    "Engagement & Lifecycle Activation",
                    ["Digital Engagement", "Customer Engagement (Lifecycle)"],
                ),
                CapabilityGroup::new(
                    "Experimentation & Causal Decisioning",
                    [
                        "Split Testing (A/B/MVT)",
                        "Prediction/Forecasting",
                        "Root Cause Analysis",
                    ],
                ),
                CapabilityGroup::new(
                    "Monitoring, Risk & Orchestration",
                    [
                        "Anomaly Detection",
                        "Compliance Monitoring",
                        "Risk Scoring",
                        "Workflow Automation",
                    ],
                ),
            ],
        }
    }

    /// Seven-group catalog with 19 capabilities, paired with cost-sized data.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            groups: vec![
                CapabilityGroup::new(
                    "Data Processing & Preparation",
                    ["Segmentation", "Data Correction", "Data Flagging"],
                ),
                CapabilityGroup::new(
                    "Language & Communication AI",
                    [
                        "Translation/Transcription",
                        "Voice/Speech Recognition",
                        "Sentiment Analysis",
                        "Content Creation",
                        "Document Generation",
                        "Digital Engagement",
                    ],
                ),
                CapabilityGroup::new(
                    "Information Retrieval & Knowledge Management",
                    ["Search & Retrieval (RAG)", "Knowledge Base / Q&A"],
                ),
                CapabilityGroup::new(
                    "Analysis & Prediction",
                    ["Data Analysis", "Prediction / Forecasting"],
                ),
                CapabilityGroup::new(
                    "Personalization & Recommendation",
                    [
                        "Personalization",
                        "Recommendation Engine",
                        "Audience Optimization",
                        "Offer Presentment",
                    ],
                ),
                CapabilityGroup::new("Automation & Orchestration", ["Workflow Automation"]),
                CapabilityGroup::new("Media Analysis", ["Image/Video Analysis"]),
            ],
        }
    }
}

impl Default for CapabilityCatalog {
    fn default() -> Self {
        Self::grouped_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{CapabilityCatalog, CapabilityGroup};

    #[test]
    fn built_in_catalogs_are_valid_partitions() {
        let grouped = CapabilityCatalog::grouped_default();
        grouped.validate().expect("grouped catalog");
        assert_eq!(grouped.groups().len(), 8);
        assert_eq!(grouped.capability_count(), 28);

        let compact = CapabilityCatalog::compact();
        compact.validate().expect("compact catalog");
        assert_eq!(compact.groups().len(), 7);
        assert_eq!(compact.capability_count(), 19);
    }

    #[test]
    fn overlapping_groups_are_rejected() {
        let result = CapabilityCatalog::new(vec![
            CapabilityGroup::new("A", ["x", "y"]),
            CapabilityGroup::new("B", ["y"]),
        ]);
        assert!(result.is_err());
    }
}
