use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::{HoverState, hit_test};
use crate::render::{LabelTarget, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{BubbleChart, PluginEvent, Tooltip};

impl<R: Renderer> BubbleChart<R> {
    /// Updates hover from a pointer position in canvas coordinates.
    ///
    /// The topmost bubble under the pointer wins.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<HoverState> {
        let hit = hit_test(self.layout.hit_circles(), x, y).map(|circle| circle.record_index);
        let changed = self.interaction.on_pointer_move(x, y, hit);
        if changed {
            trace!(x, y, record_index = ?hit, "hover changed");
        }
        match self.interaction.hover() {
            Some(hover) => self.emit_plugin_event(PluginEvent::PointHovered {
                record_index: hover.record_index,
                x,
                y,
            }),
            None => self.emit_plugin_event(PluginEvent::PointerMoved { x, y }),
        }
        self.interaction.hover()
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        self.emit_plugin_event(PluginEvent::PointerLeft);
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverState> {
        self.interaction.hover()
    }

    /// Tooltip for the hovered record, anchored next to the pointer.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let hover = self.interaction.hover()?;
        let record = self.editor.records().get(hover.record_index)?;
        Some(Tooltip::for_record(record, hover, self.config.size_metric))
    }

    /// Click handler for the group label band.
    ///
    /// Returns the toggled group and its new collapsed flag, or `None` when
    /// the click missed every group label.
    pub fn toggle_group_at(&mut self, x: f64, y: f64) -> ChartResult<Option<(String, bool)>> {
        if !self.config.collapsible_groups {
            return Ok(None);
        }
        let frame = build_render_frame(
            &self.layout,
            self.editor.records(),
            &self.config.render_style,
            false,
        );
        let target = frame
            .label_boxes
            .iter()
            .rev()
            .filter(|label| label.contains(x, y))
            .find_map(|label| match &label.target {
                LabelTarget::ToggleGroup(group) => Some(group.clone()),
                LabelTarget::None => None,
            });
        let Some(group) = target else {
            return Ok(None);
        };
        let collapsed = self.toggle_group(&group)?;
        Ok(Some((group, collapsed)))
    }
}
