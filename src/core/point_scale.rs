use serde::{Deserialize, Serialize};

/// Evenly spaced categorical scale with no outer padding.
///
/// `position(i) = i * step` where `step = extent / max(count - 1, 1)`; a
/// single category therefore sits at 0 and the step equals the full extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    extent: f64,
    count: usize,
}

impl PointScale {
    #[must_use]
    pub fn new(extent: f64, count: usize) -> Self {
        Self { extent, count }
    }

    #[must_use]
    pub fn extent(self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn step(self) -> f64 {
        let denominator = self.count.saturating_sub(1).max(1);
        self.extent / denominator as f64
    }

    #[must_use]
    pub fn position(self, index: usize) -> f64 {
        index as f64 * self.step()
    }
}
