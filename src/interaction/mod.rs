use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Pointer is over a bubble.
    Hovering,
}

/// Hovered record plus the pointer position used for tooltip placement.
///
/// Coordinates are relative to the chart canvas origin, not the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub record_index: usize,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// Circle geometry used for pointer hit testing, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitCircle {
    pub record_index: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl HitCircle {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (x - self.cx).hypot(y - self.cy) <= self.radius
    }
}

/// Returns the topmost circle under the pointer.
///
/// Circles are given in paint order, so the last match wins.
pub fn hit_test<I>(circles: I, x: f64, y: f64) -> Option<HitCircle>
where
    I: IntoIterator<Item = HitCircle>,
    I::IntoIter: DoubleEndedIterator,
{
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    circles
        .into_iter()
        .rev()
        .find(|circle| circle.contains(x, y))
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor: Option<(f64, f64)>,
    hover: Option<HoverState>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hover(self) -> Option<HoverState> {
        self.hover
    }

    /// Records a pointer move and the record under it, if any.
    ///
    /// Returns `true` when the hovered record changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, hit: Option<usize>) -> bool {
        self.cursor = Some((x, y));
        let previous = self.hover.map(|hover| hover.record_index);
        self.hover = hit.map(|record_index| HoverState {
            record_index,
            pointer_x: x,
            pointer_y: y,
        });
        self.mode = if self.hover.is_some() {
            InteractionMode::Hovering
        } else {
            InteractionMode::Idle
        };
        previous != hit
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hover = None;
        self.mode = InteractionMode::Idle;
    }

    /// Drops a hover that points past the end of a shrunk record list.
    pub fn clear_if_stale(&mut self, record_count: usize) {
        if self
            .hover
            .is_some_and(|hover| hover.record_index >= record_count)
        {
            self.hover = None;
            self.mode = InteractionMode::Idle;
        }
    }
}
