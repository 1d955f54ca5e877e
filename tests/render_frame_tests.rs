use approx::assert_abs_diff_eq;
use bubble_chart_rs::api::{RenderStyle, build_render_frame};
use bubble_chart_rs::core::seed;
use bubble_chart_rs::render::{LabelTarget, NullRenderer, TextHAlign};
use bubble_chart_rs::{BubbleChart, ChartConfig};

fn seed_chart() -> BubbleChart<NullRenderer> {
    BubbleChart::new(
        NullRenderer::default(),
        ChartConfig::collapsible(),
        seed::benefit_sized_records(),
    )
    .expect("chart init")
}

#[test]
fn expanded_seed_chart_places_every_record() {
    let chart = seed_chart();
    let layout = chart.layout();
    assert_eq!(layout.visible_count, 13);
    assert_eq!(layout.skipped_points, 0);
    assert_eq!(layout.points.len(), 13);
    assert_eq!(layout.x_axis.ticks.len(), 28);
    assert_abs_diff_eq!(layout.svg_width(), 180.0 + 27.0 * 90.0 + 24.0);
}

#[test]
fn expanded_frame_has_grid_boundaries_and_labels() {
    let chart = seed_chart();
    let frame = build_render_frame(
        chart.layout(),
        chart.records(),
        chart.render_style(),
        false,
    );

    // 28 vertical + 7 horizontal grid, 8 starts + 1 closing boundary, 7 separators.
    assert_eq!(frame.lines.len(), 28 + 7 + 9 + 7);
    assert_eq!(frame.label_boxes.len(), 28 + 8);
    assert_eq!(frame.texts.len(), 7 + 1);
    assert_eq!(frame.circles.len(), 13);
    assert_eq!(frame.overlay_texts.len(), 13);
    assert!(frame.validate().is_ok());

    let group_labels: Vec<&str> = frame
        .label_boxes
        .iter()
        .filter(|label| matches!(label.target, LabelTarget::ToggleGroup(_)))
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(group_labels.len(), 8);
    assert!(group_labels.iter().all(|text| text.starts_with('▾')));
    assert_eq!(group_labels[0], "▾ Data Foundations & Quality");

    let title = frame.texts.last().expect("axis title");
    assert_eq!(title.text, RenderStyle::default().axis_title);
    assert_eq!(title.h_align, TextHAlign::Center);
    assert!(
        frame.texts[..7]
            .iter()
            .all(|text| text.h_align == TextHAlign::Right)
    );
}

#[test]
fn collapsing_last_group_drops_ticks_and_closing_boundary() {
    let mut chart = seed_chart();
    chart
        .toggle_group("Monitoring, Risk & Orchestration")
        .expect("toggle");
    let frame = build_render_frame(
        chart.layout(),
        chart.records(),
        chart.render_style(),
        false,
    );

    assert_eq!(chart.layout().x_axis.ticks.len(), 25);
    assert_eq!(frame.lines.len(), 25 + 7 + 8 + 7);
    let last_group = frame
        .label_boxes
        .iter()
        .rev()
        .find(|label| matches!(label.target, LabelTarget::ToggleGroup(_)))
        .expect("group label");
    assert_eq!(last_group.text, "▸ Monitoring, Risk & Orchestration");
    assert_abs_diff_eq!(last_group.width, 70.0);
    assert_eq!(frame.label_boxes.len(), 24 + 8);
}

#[test]
fn show_labels_adds_name_above_each_bubble() {
    let chart = seed_chart();
    let frame = build_render_frame(
        chart.layout(),
        chart.records(),
        chart.render_style(),
        true,
    );
    assert_eq!(frame.overlay_texts.len(), 26);

    let circle = &frame.circles[0];
    let name = frame
        .overlay_texts
        .iter()
        .find(|text| text.text == chart.records()[circle.record_index].name)
        .expect("name overlay");
    assert_abs_diff_eq!(name.y, circle.cy - circle.radius - 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(name.x, circle.cx, epsilon = 1e-9);
}

#[test]
fn glyph_overlays_are_bold_and_centered_on_bubbles() {
    let chart = seed_chart();
    let frame = build_render_frame(
        chart.layout(),
        chart.records(),
        chart.render_style(),
        false,
    );
    for (circle, glyph) in frame.circles.iter().zip(&frame.overlay_texts) {
        assert!(glyph.bold);
        assert_abs_diff_eq!(glyph.x, circle.cx);
        assert_abs_diff_eq!(glyph.y, circle.cy);
    }
}

#[test]
fn render_pushes_validated_frame_to_backend() {
    let mut chart = seed_chart();
    chart.render().expect("render");
    chart.set_show_labels(true);
    chart.render().expect("render with labels");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_circle_count, 13);
    assert_eq!(renderer.last_line_count, 51);
    assert_eq!(renderer.last_text_count, 8 + 26);
    assert!(renderer.last_frame.is_some());
}
