use serde::{Deserialize, Serialize};

use crate::core::{CollapseState, EffortVisibility, FilterState};

/// Interactive, per-session view settings layered over a [`super::ChartConfig`].
///
/// None of these touch the record list; they only change what is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub collapse: CollapseState,
    #[serde(default = "default_size_multiplier")]
    pub size_multiplier: f64,
    #[serde(default)]
    pub effort_visibility: EffortVisibility,
    /// Draw each record's name above its bubble.
    #[serde(default)]
    pub show_labels: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            collapse: CollapseState::default(),
            size_multiplier: default_size_multiplier(),
            effort_visibility: EffortVisibility::default(),
            show_labels: false,
        }
    }
}

fn default_size_multiplier() -> f64 {
    1.0
}
