use smallvec::SmallVec;

use crate::core::{Record, VisibleTick};
use crate::render::{
    CirclePrimitive, LabelBoxPrimitive, LabelTarget, LinePrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{ChartLayout, RenderStyle};

const COLLAPSED_MARKER: char = '▸';
const EXPANDED_MARKER: char = '▾';

/// Materializes a layout into draw commands in canvas coordinates.
///
/// Paint order: grid, group boundaries, label-band separators, capability
/// labels, group labels, value-driver labels, axis title, then bubbles with
/// their glyph and name overlays.
#[must_use]
pub fn build_render_frame(
    layout: &ChartLayout,
    records: &[Record],
    style: &RenderStyle,
    show_labels: bool,
) -> RenderFrame {
    let origin_x = layout.margins.left;
    let origin_y = layout.margins.top;
    let inner_height = layout.plot.inner_height;
    let axis_width = layout.x_axis.width();
    let mut frame = RenderFrame::new(layout.canvas());

    for index in 0..layout.x_axis.ticks.len() {
        let x = origin_x + layout.x_axis.tick_x(index);
        frame.lines.push(LinePrimitive::new(
            x,
            origin_y,
            x,
            origin_y + inner_height,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }
    for y in layout.y_axis.positions.values() {
        let y = origin_y + y;
        frame.lines.push(LinePrimitive::new(
            origin_x,
            y,
            origin_x + axis_width,
            y,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }

    let group_count = layout.x_axis.groups.len();
    for (index, range) in layout.x_axis.groups.iter().enumerate() {
        let (start, end) = layout.group_band(range);
        let mut boundaries: SmallVec<[f64; 2]> = SmallVec::new();
        boundaries.push(start);
        if index + 1 == group_count && end != start {
            boundaries.push(end);
        }
        for x in boundaries {
            frame.lines.push(LinePrimitive::new(
                origin_x + x,
                origin_y,
                origin_x + x,
                origin_y + inner_height,
                style.group_boundary_width,
                style.group_boundary_color,
            ));
        }
    }

    for range in layout.x_axis.groups.iter().skip(1) {
        let (start, _) = layout.group_band(range);
        frame.lines.push(LinePrimitive::new(
            origin_x + start,
            origin_y + inner_height + style.group_separator_top_offset_px,
            origin_x + start,
            origin_y + inner_height + style.group_separator_bottom_offset_px,
            style.group_separator_width,
            style.group_separator_color,
        ));
    }

    for tick in &layout.x_axis.ticks {
        let VisibleTick::Capability { capability, .. } = tick else {
            continue;
        };
        let Some(cx) = layout.x_axis.x_of(capability) else {
            continue;
        };
        let width = style.capability_label_box_width_px;
        frame.label_boxes.push(LabelBoxPrimitive {
            text: capability.clone(),
            x: origin_x + cx - width / 2.0 + style.capability_label_nudge_x_px,
            y: origin_y + inner_height + style.capability_label_offset_y_px,
            width,
            height: style.capability_label_box_height_px,
            font_size_px: style.capability_label_font_size_px,
            color: style.capability_label_color,
            h_align: TextHAlign::Center,
            target: LabelTarget::None,
        });
    }

    for range in &layout.x_axis.groups {
        let (start, end) = layout.group_band(range);
        let pad = style.group_label_padding_px;
        let width = (end - start + pad).max(pad);
        let marker = if range.collapsed {
            COLLAPSED_MARKER
        } else {
            EXPANDED_MARKER
        };
        frame.label_boxes.push(LabelBoxPrimitive {
            text: format!("{marker} {}", range.name),
            x: origin_x + range.center - width / 2.0,
            y: origin_y + inner_height + style.group_label_offset_y_px,
            width,
            height: style.group_label_box_height_px,
            font_size_px: style.group_label_font_size_px,
            color: style.group_label_color,
            h_align: TextHAlign::Center,
            target: LabelTarget::ToggleGroup(range.name.clone()),
        });
    }

    for (driver, y) in &layout.y_axis.positions {
        frame.texts.push(TextPrimitive::new(
            driver.as_str(),
            origin_x - style.value_driver_label_offset_x_px,
            origin_y + y,
            style.value_driver_label_font_size_px,
            style.value_driver_label_color,
            TextHAlign::Right,
        ));
    }

    frame.texts.push(TextPrimitive::new(
        style.axis_title.clone(),
        origin_x + axis_width / 2.0,
        origin_y + inner_height + style.axis_title_offset_y_px,
        style.axis_title_font_size_px,
        style.axis_title_color,
        TextHAlign::Center,
    ));

    for point in &layout.points {
        let cx = origin_x + point.x;
        let cy = origin_y + point.y;
        frame.circles.push(CirclePrimitive {
            cx,
            cy,
            radius: point.radius,
            fill: point.fill,
            opacity: point.opacity,
            record_index: point.record_index,
        });
        if let Some(glyph) = point.glyph {
            frame.overlay_texts.push(
                TextPrimitive::new(
                    glyph.to_string(),
                    cx,
                    cy,
                    point.glyph_font_size,
                    style.glyph_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
        if show_labels {
            let name = records
                .get(point.record_index)
                .map(|record| record.name.as_str())
                .filter(|name| !name.is_empty());
            if let Some(name) = name {
                frame.overlay_texts.push(TextPrimitive::new(
                    name,
                    cx,
                    cy - point.radius - style.point_label_gap_px,
                    style.point_label_font_size_px,
                    style.point_label_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    frame
}
