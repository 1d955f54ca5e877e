use serde::Serialize;

use crate::core::{GroupRange, Viewport, VisibleTick};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::{BubbleChart, ChartSummary, PlacedPoint, SelfCheck};

/// Deterministic view of the engine state for fixture-based regression tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub svg_width: f64,
    pub axis_width: f64,
    pub ticks: Vec<VisibleTick>,
    pub groups: Vec<GroupRange>,
    pub points: Vec<PlacedPoint>,
    pub skipped_points: usize,
    pub hover: Option<HoverState>,
    pub summary: ChartSummary,
    pub issues: Vec<String>,
    pub self_checks: Vec<SelfCheck>,
}

impl<R: Renderer> BubbleChart<R> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            viewport: self.viewport,
            svg_width: self.layout.svg_width(),
            axis_width: self.layout.x_axis.width(),
            ticks: self.layout.x_axis.ticks.clone(),
            groups: self.layout.x_axis.groups.clone(),
            points: self.layout.points.clone(),
            skipped_points: self.layout.skipped_points,
            hover: self.interaction.hover(),
            summary: self.summary(),
            issues: self.validation_issues(),
            self_checks: self.self_checks(),
        })
    }

    /// Serializes snapshot as pretty JSON.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
