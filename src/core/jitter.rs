use std::f64::consts::PI;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::record::{Record, ValueDriver};

/// Base spread in px for a full cell.
pub const BASE_JITTER_PX: f64 = 10.0;
/// Hard cap on any single offset, independent of cell population.
pub const MAX_JITTER_PX: f64 = 16.0;

/// `π(3 − √5)`, the irrational rotation used by phyllotactic spirals.
#[must_use]
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Pixel displacement applied on top of a point's categorical position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JitterOffset {
    pub dx: f64,
    pub dy: f64,
}

impl JitterOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Spiral tuning for [`jitter_offsets`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterConfig {
    pub base_px: f64,
    pub max_px: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            base_px: BASE_JITTER_PX,
            max_px: MAX_JITTER_PX,
        }
    }
}

/// Offset for member `index` of a cell holding `count` points.
#[must_use]
pub fn spiral_offset(index: usize, count: usize, config: JitterConfig) -> JitterOffset {
    if count <= 1 {
        return JitterOffset::ZERO;
    }
    let radius = (config.base_px * ((index + 1) as f64 / count as f64).sqrt()).min(config.max_px);
    let angle = index as f64 * golden_angle();
    JitterOffset {
        dx: angle.cos() * radius,
        dy: angle.sin() * radius,
    }
}

/// Spreads records sharing a (capability, value driver) cell.
///
/// Returns one offset per input record, in input order. Membership index
/// within a cell follows input order, so re-filtering may reshuffle offsets.
#[must_use]
pub fn jitter_offsets(records: &[&Record], config: JitterConfig) -> Vec<JitterOffset> {
    let mut cells: IndexMap<(&str, &ValueDriver), SmallVec<[usize; 4]>> = IndexMap::new();
    for (position, record) in records.iter().enumerate() {
        cells
            .entry((record.capability.as_str(), &record.value_driver))
            .or_default()
            .push(position);
    }

    let mut offsets = vec![JitterOffset::ZERO; records.len()];
    for members in cells.values() {
        for (index, position) in members.iter().enumerate() {
            offsets[*position] = spiral_offset(index, members.len(), config);
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::{JitterConfig, golden_angle, spiral_offset};

    #[test]
    fn golden_angle_constant() {
        assert!((golden_angle() - 2.399_963).abs() < 1e-6);
    }

    #[test]
    fn first_member_of_pair_sits_on_positive_x_axis() {
        let offset = spiral_offset(0, 2, JitterConfig::default());
        let expected = 10.0 * 0.5_f64.sqrt();
        assert!((offset.dx - expected).abs() < 1e-12);
        assert_eq!(offset.dy, 0.0);
    }
}
