use tracing::debug;

use crate::core::{Record, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::{InteractionMode, InteractionState};
use crate::render::Renderer;

use super::layout::compute_layout;
use super::record_editor::default_record;
use super::render_frame_builder::build_render_frame;
use super::render_style::validate_render_style;
use super::{ChartConfig, ChartLayout, PluginEvent, RecordEditor, RenderStyle, ViewState};

/// Main orchestration facade consumed by host applications.
///
/// `BubbleChart` owns the record list, view toggles, and interaction state,
/// keeps a resolved [`ChartLayout`] in sync with them, and hands frames to
/// the renderer.
pub struct BubbleChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) view: ViewState,
    pub(super) editor: RecordEditor,
    pub(super) viewport: Viewport,
    pub(super) interaction: InteractionState,
    pub(super) layout: ChartLayout,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> BubbleChart<R> {
    /// Validates `config` and lays out `records` at the default viewport.
    pub fn new(renderer: R, config: ChartConfig, records: Vec<Record>) -> ChartResult<Self> {
        Self::with_viewport(renderer, config, records, Viewport::default())
    }

    pub fn with_viewport(
        renderer: R,
        config: ChartConfig,
        records: Vec<Record>,
        viewport: Viewport,
    ) -> ChartResult<Self> {
        config.validate()?;
        let view = ViewState::default();
        let layout = compute_layout(&records, &config, &view, viewport)?;
        let editor = RecordEditor::new(records, default_record(&config.catalog, config.size_metric));
        debug!(
            records = editor.len(),
            width = viewport.width,
            height = viewport.height,
            "initialized bubble chart"
        );
        Ok(Self {
            renderer,
            config,
            view,
            editor,
            viewport,
            interaction: InteractionState::default(),
            layout,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        self.editor.records()
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn render_style(&self) -> &RenderStyle {
        &self.config.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(&style)?;
        self.config.render_style = style;
        Ok(())
    }

    /// Applies a new host viewport and re-lays out the chart.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }
        self.viewport = viewport;
        self.relayout()?;
        self.emit_plugin_event(PluginEvent::ViewportResized {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    /// Resize hook for hosts that only observe their content width.
    pub fn set_content_width(&mut self, width: f64) -> ChartResult<Viewport> {
        let viewport = Viewport::from_content_width(width)?;
        self.set_viewport(viewport)?;
        Ok(viewport)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = build_render_frame(
            &self.layout,
            self.editor.records(),
            &self.config.render_style,
            self.view.show_labels,
        );
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Recomputes the cached layout and drops a hover whose bubble vanished.
    pub(super) fn relayout(&mut self) -> ChartResult<()> {
        self.layout = compute_layout(self.editor.records(), &self.config, &self.view, self.viewport)?;
        self.interaction.clear_if_stale(self.editor.len());
        let hover_vanished = self
            .interaction
            .hover()
            .is_some_and(|hover| self.layout.point(hover.record_index).is_none());
        if hover_vanished {
            self.interaction.on_pointer_leave();
        }
        Ok(())
    }
}
