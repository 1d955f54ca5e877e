use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LabelBoxPrimitive, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// `canvas` may be wider than the host viewport when many ticks are visible;
/// hosts are expected to scroll horizontally in that case. Collections paint
/// in field order; `overlay_texts` holds glyphs and names drawn over bubbles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub label_boxes: Vec<LabelBoxPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub overlay_texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: Viewport) -> Self {
        Self {
            canvas,
            lines: Vec::new(),
            label_boxes: Vec::new(),
            texts: Vec::new(),
            circles: Vec::new(),
            overlay_texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for label_box in &self.label_boxes {
            label_box.validate()?;
        }
        for text in self.texts.iter().chain(&self.overlay_texts) {
            text.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.label_boxes.is_empty()
            && self.texts.is_empty()
            && self.circles.is_empty()
            && self.overlay_texts.is_empty()
    }
}
