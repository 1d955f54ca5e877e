use tracing::debug;

use crate::core::{CategoryFilter, Effort, Risk, ValueDriver};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BubbleChart, PluginEvent, ViewState};

impl<R: Renderer> BubbleChart<R> {
    /// Replaces every view toggle at once; the size multiplier is clamped.
    ///
    /// A non-finite minimum benefit is rejected and the current view is kept.
    pub fn set_view_state(&mut self, mut view: ViewState) -> ChartResult<()> {
        ensure_finite_min_benefit(view.filters.min_benefit)?;
        view.size_multiplier = self.config.size_multiplier_range.clamp(view.size_multiplier);
        self.view = view;
        self.relayout()
    }

    /// Flips a group between collapsed and expanded.
    ///
    /// Returns the new collapsed flag. Unknown groups and charts without
    /// collapsible groups are rejected.
    pub fn toggle_group(&mut self, group: &str) -> ChartResult<bool> {
        self.ensure_collapsible_group(group)?;
        let collapsed = self.view.collapse.toggle(group);
        self.after_collapse_changed(group, collapsed)?;
        Ok(collapsed)
    }

    pub fn set_group_collapsed(&mut self, group: &str, collapsed: bool) -> ChartResult<()> {
        self.ensure_collapsible_group(group)?;
        if self.view.collapse.is_collapsed(group) == collapsed {
            return Ok(());
        }
        self.view.collapse.set_collapsed(group, collapsed);
        self.after_collapse_changed(group, collapsed)
    }

    pub fn expand_all_groups(&mut self) -> ChartResult<()> {
        self.ensure_collapsible()?;
        self.view.collapse.expand_all();
        self.relayout()
    }

    pub fn collapse_all_groups(&mut self) -> ChartResult<()> {
        self.ensure_collapsible()?;
        self.view.collapse.collapse_all(&self.config.catalog);
        self.relayout()
    }

    pub fn set_risk_enabled(&mut self, risk: Risk, enabled: bool) -> ChartResult<()> {
        self.view.filters.set_risk_enabled(risk, enabled);
        self.relayout()
    }

    pub fn set_capability_filter(&mut self, filter: CategoryFilter<String>) -> ChartResult<()> {
        if let CategoryFilter::Only(capability) = &filter {
            if !self.config.catalog.contains(capability) {
                return Err(ChartError::InvalidData(format!(
                    "unknown capability filter `{capability}`"
                )));
            }
        }
        self.view.filters.capability = filter;
        self.relayout()
    }

    pub fn set_value_driver_filter(&mut self, filter: CategoryFilter<ValueDriver>) -> ChartResult<()> {
        self.view.filters.value_driver = filter;
        self.relayout()
    }

    pub fn set_min_benefit(&mut self, min_benefit: f64) -> ChartResult<()> {
        ensure_finite_min_benefit(min_benefit)?;
        self.view.filters.min_benefit = min_benefit;
        self.relayout()
    }

    /// Sets the bubble-size multiplier and returns the clamped value applied.
    pub fn set_size_multiplier(&mut self, multiplier: f64) -> ChartResult<f64> {
        let applied = self.config.size_multiplier_range.clamp(multiplier);
        self.view.size_multiplier = applied;
        self.relayout()?;
        Ok(applied)
    }

    pub fn set_effort_visible(&mut self, effort: &Effort, visible: bool) -> ChartResult<()> {
        if !effort.is_known() {
            return Err(ChartError::InvalidData(format!(
                "no glyph toggle for effort `{effort}`"
            )));
        }
        self.view.effort_visibility.set(effort, visible);
        self.relayout()
    }

    pub fn set_show_labels(&mut self, show_labels: bool) {
        self.view.show_labels = show_labels;
    }

    fn ensure_collapsible(&self) -> ChartResult<()> {
        if !self.config.collapsible_groups {
            return Err(ChartError::InvalidData(
                "capability groups are not collapsible in this chart".to_owned(),
            ));
        }
        Ok(())
    }

    fn ensure_collapsible_group(&self, group: &str) -> ChartResult<()> {
        self.ensure_collapsible()?;
        if self.config.catalog.group(group).is_none() {
            return Err(ChartError::InvalidData(format!(
                "unknown capability group `{group}`"
            )));
        }
        Ok(())
    }

    fn after_collapse_changed(&mut self, group: &str, collapsed: bool) -> ChartResult<()> {
        self.relayout()?;
        debug!(
            group,
            collapsed,
            ticks = self.layout.x_axis.ticks.len(),
            "group collapse changed"
        );
        self.emit_plugin_event(PluginEvent::GroupToggled {
            group: group.to_owned(),
            collapsed,
        });
        Ok(())
    }
}

fn ensure_finite_min_benefit(min_benefit: f64) -> ChartResult<()> {
    if !min_benefit.is_finite() {
        return Err(ChartError::InvalidData(
            "minimum benefit must be finite".to_owned(),
        ));
    }
    Ok(())
}
