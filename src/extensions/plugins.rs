use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{HoverState, InteractionMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub records_len: usize,
    pub visible_points: usize,
    pub visible_ticks: usize,
    pub interaction_mode: InteractionMode,
    pub hover: Option<HoverState>,
}

/// Event stream exposed to plugins.
///
/// Pointer events carry canvas-relative coordinates for tooltip placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    RecordsChanged { records_len: usize },
    PointHovered { record_index: usize, x: f64, y: f64 },
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    GroupToggled { group: String, collapsed: bool },
    ViewportResized { width: f64, height: f64 },
    Rendered,
}

/// Extension hook interface for bounded custom logic such as tooltips.
///
/// Plugins can observe events and read engine context without mutating
/// records or view state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
