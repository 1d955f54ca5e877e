use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Smallest and largest height the chart derives from its content width.
pub const MIN_VIEWPORT_HEIGHT: f64 = 420.0;
pub const MAX_VIEWPORT_HEIGHT: f64 = 720.0;
/// Height/width ratio applied before clamping.
pub const VIEWPORT_ASPECT: f64 = 0.55;

/// Host content area in CSS-like pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Derives the viewport from the host-reported content width.
    ///
    /// Height follows `clamp(width * 0.55, 420, 720)`.
    pub fn from_content_width(width: f64) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height: 0.0 });
        }
        let height = (width * VIEWPORT_ASPECT).clamp(MIN_VIEWPORT_HEIGHT, MAX_VIEWPORT_HEIGHT);
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 520.0,
        }
    }
}

/// Space reserved around the plot area for labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 24.0, 240.0, 180.0)
    }
}

/// Floor applied to the inner plot extent before categorical spacing.
pub const MIN_INNER_EXTENT: f64 = 200.0;

/// Inner plot size after margins, floored at [`MIN_INNER_EXTENT`] per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Self {
        Self {
            inner_width: (viewport.width - margins.left - margins.right).max(MIN_INNER_EXTENT),
            inner_height: (viewport.height - margins.top - margins.bottom).max(MIN_INNER_EXTENT),
        }
    }
}
