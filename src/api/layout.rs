use serde::Serialize;
use tracing::{debug, trace};

use crate::core::{
    CapabilityAxis, CollapseState, EncodingContext, GroupRange, JitterOffset, Margins, PlotArea,
    Record, ValueDriverAxis, Viewport, encode_records, filter_records, jitter_offsets,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HitCircle;
use crate::render::Color;

use super::{ChartConfig, ViewState};

/// One visible bubble, positioned in plot-area coordinates.
///
/// `x`/`y` already include the jitter offset; `base_x`/`base_y` are the
/// categorical cell center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedPoint {
    pub record_index: usize,
    pub base_x: f64,
    pub base_y: f64,
    pub x: f64,
    pub y: f64,
    pub area: f64,
    pub radius: f64,
    pub fill: Color,
    pub opacity: f64,
    pub glyph: Option<char>,
    pub glyph_font_size: f64,
}

/// Fully resolved geometry for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub plot: PlotArea,
    pub x_axis: CapabilityAxis,
    pub y_axis: ValueDriverAxis,
    /// Records that passed the filter, including ones that could not be placed.
    pub visible_count: usize,
    /// Filtered records whose capability or value driver has no axis position.
    pub skipped_points: usize,
    pub points: Vec<PlacedPoint>,
    pub group_band_min_width: f64,
}

impl ChartLayout {
    /// Canvas width: the axis may overflow the viewport and scroll.
    #[must_use]
    pub fn svg_width(&self) -> f64 {
        self.margins.left + self.x_axis.width() + self.margins.right
    }

    #[must_use]
    pub fn svg_height(&self) -> f64 {
        self.viewport.height
    }

    /// Canvas size as a viewport, for frame construction.
    #[must_use]
    pub fn canvas(&self) -> Viewport {
        Viewport::new(self.svg_width(), self.svg_height())
    }

    #[must_use]
    pub fn point(&self, record_index: usize) -> Option<&PlacedPoint> {
        self.points
            .iter()
            .find(|point| point.record_index == record_index)
    }

    /// Drawn horizontal span of a group band after the minimum-width floor.
    #[must_use]
    pub fn group_band(&self, range: &GroupRange) -> (f64, f64) {
        range.band(self.group_band_min_width)
    }

    /// Circles in canvas coordinates and paint order.
    pub fn hit_circles(&self) -> impl DoubleEndedIterator<Item = HitCircle> + '_ {
        self.points.iter().map(|point| HitCircle {
            record_index: point.record_index,
            cx: self.margins.left + point.x,
            cy: self.margins.top + point.y,
            radius: point.radius,
        })
    }
}

/// Runs the full layout pass: filter, axes, jitter, and visual encoding.
pub fn compute_layout(
    records: &[Record],
    config: &ChartConfig,
    view: &ViewState,
    viewport: Viewport,
) -> ChartResult<ChartLayout> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let plot = PlotArea::from_viewport(viewport, config.margins);
    let expanded = CollapseState::default();
    let collapse = if config.collapsible_groups {
        &view.collapse
    } else {
        &expanded
    };
    let x_axis = CapabilityAxis::build(
        &config.catalog,
        collapse,
        config.axis_width_policy,
        plot.inner_width,
    );
    let y_axis = ValueDriverAxis::build(plot.inner_height);

    let multiplier = config.size_multiplier_range.clamp(view.size_multiplier);
    let context = EncodingContext::for_records(
        records,
        config.size_metric,
        config.opacity_policy,
        multiplier,
        view.effort_visibility,
    );

    let visible = filter_records(records, &view.filters);
    let visible_records: Vec<&Record> = visible.iter().map(|(_, record)| *record).collect();
    let offsets = match config.jitter {
        Some(jitter) => jitter_offsets(&visible_records, jitter),
        None => vec![JitterOffset::ZERO; visible_records.len()],
    };
    let encodings = encode_records(&visible_records, &context);

    let mut points = Vec::with_capacity(visible.len());
    let mut skipped_points = 0;
    for (((record_index, record), offset), encoding) in
        visible.iter().zip(&offsets).zip(&encodings)
    {
        let (Some(base_x), Some(base_y)) = (
            x_axis.x_of(&record.capability),
            y_axis.y_of(&record.value_driver),
        ) else {
            trace!(
                record_index = *record_index,
                capability = %record.capability,
                value_driver = %record.value_driver,
                "skipping record without axis position"
            );
            skipped_points += 1;
            continue;
        };
        points.push(PlacedPoint {
            record_index: *record_index,
            base_x,
            base_y,
            x: base_x + offset.dx,
            y: base_y + offset.dy,
            area: encoding.area,
            radius: encoding.radius,
            fill: encoding.fill,
            opacity: encoding.opacity,
            glyph: encoding.glyph,
            glyph_font_size: encoding.glyph_font_size,
        });
    }

    debug!(
        records = records.len(),
        visible = visible.len(),
        placed = points.len(),
        skipped = skipped_points,
        ticks = x_axis.ticks.len(),
        axis_width = x_axis.width(),
        "computed chart layout"
    );

    Ok(ChartLayout {
        viewport,
        margins: config.margins,
        plot,
        x_axis,
        y_axis,
        visible_count: visible.len(),
        skipped_points,
        points,
        group_band_min_width: config.group_band_min_width,
    })
}
