use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::CapabilityCatalog;
use super::point_scale::PointScale;
use super::record::ValueDriver;

/// Per-group collapsed flag; groups absent from the map are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseState {
    collapsed: IndexMap<String, bool>,
}

impl CollapseState {
    #[must_use]
    pub fn is_collapsed(&self, group: &str) -> bool {
        self.collapsed.get(group).copied().unwrap_or(false)
    }

    /// Flips one group and returns its new collapsed flag.
    pub fn toggle(&mut self, group: &str) -> bool {
        let next = !self.is_collapsed(group);
        self.collapsed.insert(group.to_owned(), next);
        next
    }

    pub fn set_collapsed(&mut self, group: &str, collapsed: bool) {
        self.collapsed.insert(group.to_owned(), collapsed);
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    pub fn collapse_all(&mut self, catalog: &CapabilityCatalog) {
        self.collapsed = catalog
            .groups()
            .iter()
            .map(|group| (group.name.clone(), true))
            .collect();
    }

    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.collapsed.values().filter(|collapsed| **collapsed).count()
    }
}

/// One X-axis position: a single capability or a collapsed group placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisibleTick {
    Capability { capability: String, group: String },
    Group { group: String },
}

impl VisibleTick {
    /// Stable identity used by hosts to key tick widgets.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Capability { capability, .. } => format!("cap:{capability}"),
            Self::Group { group } => format!("group:{group}"),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Capability { capability, .. } => capability,
            Self::Group { group } => group,
        }
    }

    #[must_use]
    pub fn group_name(&self) -> &str {
        match self {
            Self::Capability { group, .. } | Self::Group { group } => group,
        }
    }

    #[must_use]
    pub fn is_capability(&self) -> bool {
        matches!(self, Self::Capability { .. })
    }
}

/// How the drawable X extent is derived from the visible tick count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AxisWidthPolicy {
    /// Width follows tick count: `max(min_width, max(ticks - 1, 1) * step)`,
    /// with the wider step while any capability tick is visible.
    Adaptive {
        capability_step: f64,
        group_step: f64,
        min_width: f64,
    },
    /// Width fills the plot area but never drops below `min_step` per tick.
    Fill { min_step: f64 },
}

impl AxisWidthPolicy {
    #[must_use]
    pub const fn adaptive(capability_step: f64, group_step: f64) -> Self {
        Self::Adaptive {
            capability_step,
            group_step,
            min_width: 300.0,
        }
    }

    #[must_use]
    pub fn resolve(self, tick_count: usize, has_capability_ticks: bool, inner_width: f64) -> f64 {
        let steps = tick_count.saturating_sub(1).max(1) as f64;
        match self {
            Self::Adaptive {
                capability_step,
                group_step,
                min_width,
            } => {
                let base_step = if has_capability_ticks {
                    capability_step
                } else {
                    group_step
                };
                (steps * base_step).max(min_width)
            }
            Self::Fill { min_step } => inner_width.max(steps * min_step),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        match self {
            Self::Adaptive {
                capability_step,
                group_step,
                min_width,
            } => positive(capability_step) && positive(group_step) && positive(min_width),
            Self::Fill { min_step } => positive(min_step),
        }
    }
}

impl Default for AxisWidthPolicy {
    fn default() -> Self {
        Self::adaptive(90.0, 60.0)
    }
}

/// Horizontal span covered by one capability group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRange {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub center: f64,
    pub item_count: usize,
    pub collapsed: bool,
}

impl GroupRange {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Range widened symmetrically to at least `min_width` around its center.
    #[must_use]
    pub fn band(&self, min_width: f64) -> (f64, f64) {
        let width = self.width();
        if width >= min_width {
            return (self.start, self.end);
        }
        let half = min_width / 2.0;
        (self.center - half, self.center + half)
    }
}

/// Resolved X axis: visible ticks, capability positions, and group spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityAxis {
    pub ticks: Vec<VisibleTick>,
    pub positions: IndexMap<String, f64>,
    pub groups: Vec<GroupRange>,
    pub scale: PointScale,
}

impl CapabilityAxis {
    /// Lays out the capability axis for the current collapse state.
    ///
    /// `inner_width` only matters for [`AxisWidthPolicy::Fill`].
    #[must_use]
    pub fn build(
        catalog: &CapabilityCatalog,
        collapse: &CollapseState,
        policy: AxisWidthPolicy,
        inner_width: f64,
    ) -> Self {
        let ticks = visible_ticks(catalog, collapse);
        let has_capability_ticks = ticks.iter().any(VisibleTick::is_capability);
        let width = policy.resolve(ticks.len(), has_capability_ticks, inner_width);
        let scale = PointScale::new(width, ticks.len());

        let mut positions = IndexMap::with_capacity(catalog.capability_count());
        for (index, tick) in ticks.iter().enumerate() {
            let x = scale.position(index);
            match tick {
                VisibleTick::Capability { capability, .. } => {
                    positions.insert(capability.clone(), x);
                }
                VisibleTick::Group { group } => {
                    if let Some(group) = catalog.group(group) {
                        for item in &group.items {
                            positions.insert(item.clone(), x);
                        }
                    }
                }
            }
        }

        let groups = catalog
            .groups()
            .iter()
            .map(|group| {
                let start = group
                    .items
                    .first()
                    .and_then(|first| positions.get(first))
                    .copied()
                    .unwrap_or(0.0);
                let end = group
                    .items
                    .last()
                    .and_then(|last| positions.get(last))
                    .copied()
                    .unwrap_or(start);
                GroupRange {
                    name: group.name.clone(),
                    start,
                    end,
                    center: (start + end) / 2.0,
                    item_count: group.items.len(),
                    collapsed: collapse.is_collapsed(&group.name),
                }
            })
            .collect();

        Self {
            ticks,
            positions,
            groups,
            scale,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.scale.extent()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.scale.step()
    }

    #[must_use]
    pub fn x_of(&self, capability: &str) -> Option<f64> {
        self.positions.get(capability).copied()
    }

    #[must_use]
    pub fn tick_x(&self, index: usize) -> f64 {
        self.scale.position(index)
    }

    #[must_use]
    pub fn group_range(&self, name: &str) -> Option<&GroupRange> {
        self.groups.iter().find(|range| range.name == name)
    }

    #[must_use]
    pub fn has_capability_ticks(&self) -> bool {
        self.ticks.iter().any(VisibleTick::is_capability)
    }
}

/// Walks groups in order, emitting one tick per collapsed group or one per item.
#[must_use]
pub fn visible_ticks(catalog: &CapabilityCatalog, collapse: &CollapseState) -> Vec<VisibleTick> {
    let mut ticks = Vec::with_capacity(catalog.capability_count());
    for group in catalog.groups() {
        if collapse.is_collapsed(&group.name) {
            ticks.push(VisibleTick::Group {
                group: group.name.clone(),
            });
        } else {
            ticks.extend(group.items.iter().map(|item| VisibleTick::Capability {
                capability: item.clone(),
                group: group.name.clone(),
            }));
        }
    }
    ticks
}

/// Resolved Y axis over the fixed value-driver list, first driver at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDriverAxis {
    pub positions: IndexMap<ValueDriver, f64>,
    pub scale: PointScale,
}

impl ValueDriverAxis {
    #[must_use]
    pub fn build(inner_height: f64) -> Self {
        let drivers: Vec<ValueDriver> = ValueDriver::known().collect();
        let scale = PointScale::new(inner_height, drivers.len());
        let positions = drivers
            .into_iter()
            .enumerate()
            .map(|(index, driver)| (driver, scale.position(index)))
            .collect();
        Self { positions, scale }
    }

    #[must_use]
    pub fn y_of(&self, driver: &ValueDriver) -> Option<f64> {
        self.positions.get(driver).copied()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.scale.extent()
    }
}
