use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, strokes, fonts, and label-band offsets used by the frame builder.
///
/// Offsets are measured from the bottom edge of the plot area unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub group_boundary_color: Color,
    pub group_boundary_width: f64,
    pub group_separator_color: Color,
    pub group_separator_width: f64,
    /// Vertical extent of group separators inside the label band.
    pub group_separator_top_offset_px: f64,
    pub group_separator_bottom_offset_px: f64,

    pub capability_label_color: Color,
    pub capability_label_font_size_px: f64,
    pub capability_label_box_width_px: f64,
    pub capability_label_box_height_px: f64,
    pub capability_label_offset_y_px: f64,
    /// Horizontal nudge applied after centering the label box on its tick.
    pub capability_label_nudge_x_px: f64,

    pub group_label_color: Color,
    pub group_label_font_size_px: f64,
    /// Extra width so a group title covers the tick labels beneath it.
    pub group_label_padding_px: f64,
    pub group_label_box_height_px: f64,
    pub group_label_offset_y_px: f64,

    pub value_driver_label_color: Color,
    pub value_driver_label_font_size_px: f64,
    /// Distance left of the plot origin.
    pub value_driver_label_offset_x_px: f64,

    pub axis_title: String,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,
    pub axis_title_offset_y_px: f64,

    pub glyph_color: Color,
    pub point_label_color: Color,
    pub point_label_font_size_px: f64,
    /// Gap between a bubble's top edge and its name label.
    pub point_label_gap_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::from_rgb_hex(0xe5e7eb),
            grid_line_width: 1.0,
            group_boundary_color: Color::from_rgb_hex(0x94a3b8),
            group_boundary_width: 1.25,
            group_separator_color: Color::from_rgb_hex(0xcbd5e1),
            group_separator_width: 1.0,
            group_separator_top_offset_px: 24.0,
            group_separator_bottom_offset_px: 110.0,

            capability_label_color: Color::from_rgb_hex(0x334155),
            capability_label_font_size_px: 11.0,
            capability_label_box_width_px: 70.0,
            capability_label_box_height_px: 60.0,
            capability_label_offset_y_px: 30.0,
            capability_label_nudge_x_px: 6.0,

            group_label_color: Color::from_rgb_hex(0x1e293b),
            group_label_font_size_px: 12.0,
            group_label_padding_px: 70.0,
            group_label_box_height_px: 34.0,
            group_label_offset_y_px: 100.0,

            value_driver_label_color: Color::from_rgb_hex(0x334155),
            value_driver_label_font_size_px: 11.0,
            value_driver_label_offset_x_px: 10.0,

            axis_title: "Capability Type (X)".to_owned(),
            axis_title_color: Color::from_rgb_hex(0x475569),
            axis_title_font_size_px: 12.0,
            axis_title_offset_y_px: 150.0,

            glyph_color: Color::from_rgb_hex(0x0f172a),
            point_label_color: Color::from_rgb_hex(0x1e293b),
            point_label_font_size_px: 10.0,
            point_label_gap_px: 8.0,
        }
    }
}

pub(super) fn validate_render_style(style: &RenderStyle) -> ChartResult<()> {
    for color in [
        style.grid_line_color,
        style.group_boundary_color,
        style.group_separator_color,
        style.capability_label_color,
        style.group_label_color,
        style.value_driver_label_color,
        style.axis_title_color,
        style.glyph_color,
        style.point_label_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("grid_line_width", style.grid_line_width),
        ("group_boundary_width", style.group_boundary_width),
        ("group_separator_width", style.group_separator_width),
        (
            "capability_label_font_size_px",
            style.capability_label_font_size_px,
        ),
        (
            "capability_label_box_width_px",
            style.capability_label_box_width_px,
        ),
        (
            "capability_label_box_height_px",
            style.capability_label_box_height_px,
        ),
        ("group_label_font_size_px", style.group_label_font_size_px),
        ("group_label_padding_px", style.group_label_padding_px),
        ("group_label_box_height_px", style.group_label_box_height_px),
        (
            "value_driver_label_font_size_px",
            style.value_driver_label_font_size_px,
        ),
        ("axis_title_font_size_px", style.axis_title_font_size_px),
        ("point_label_font_size_px", style.point_label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        (
            "group_separator_top_offset_px",
            style.group_separator_top_offset_px,
        ),
        (
            "group_separator_bottom_offset_px",
            style.group_separator_bottom_offset_px,
        ),
        (
            "capability_label_offset_y_px",
            style.capability_label_offset_y_px,
        ),
        (
            "capability_label_nudge_x_px",
            style.capability_label_nudge_x_px,
        ),
        ("group_label_offset_y_px", style.group_label_offset_y_px),
        (
            "value_driver_label_offset_x_px",
            style.value_driver_label_offset_x_px,
        ),
        ("axis_title_offset_y_px", style.axis_title_offset_y_px),
        ("point_label_gap_px", style.point_label_gap_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite"
            )));
        }
    }

    if style.axis_title.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "render style `axis_title` must not be empty".to_owned(),
        ));
    }

    Ok(())
}
