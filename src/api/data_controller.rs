use tracing::{debug, warn};

use crate::core::Record;
use crate::error::ChartResult;
use crate::extensions::ClipboardSink;
use crate::render::Renderer;

use super::diagnostics::run_self_checks;
use super::validation::validate_records;
use super::{BubbleChart, ChartSummary, PluginEvent, RecordField, SelfCheck};

impl<R: Renderer> BubbleChart<R> {
    /// Replaces the whole record list.
    pub fn set_records(&mut self, records: Vec<Record>) -> ChartResult<()> {
        self.editor.replace_all(records);
        self.after_records_changed()
    }

    /// Appends a default row and returns its index.
    pub fn add_default_record(&mut self) -> ChartResult<usize> {
        let index = self.editor.add_default();
        self.after_records_changed()?;
        Ok(index)
    }

    pub fn update_record_field(
        &mut self,
        index: usize,
        field: RecordField,
        value: &str,
    ) -> ChartResult<()> {
        self.editor.update_field(index, field, value)?;
        self.after_records_changed()
    }

    pub fn delete_record(&mut self, index: usize) -> ChartResult<Record> {
        let removed = self.editor.delete(index)?;
        self.after_records_changed()?;
        Ok(removed)
    }

    /// Replaces the record list from JSON text.
    ///
    /// On failure the current list is kept and exactly one error is returned.
    pub fn import_json(&mut self, text: &str) -> ChartResult<usize> {
        match self.editor.import_json(text) {
            Ok(count) => {
                self.after_records_changed()?;
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "rejected record import");
                Err(err)
            }
        }
    }

    pub fn export_json(&self) -> ChartResult<String> {
        self.editor.export_json()
    }

    /// Writes the export text to `sink`; clipboard failures are logged and dropped.
    pub fn copy_json(&self, sink: &mut dyn ClipboardSink) -> ChartResult<()> {
        let text = self.export_json()?;
        if let Err(err) = sink.write_text(&text) {
            debug!(error = %err, "clipboard write failed");
        }
        Ok(())
    }

    #[must_use]
    pub fn validation_issues(&self) -> Vec<String> {
        validate_records(
            self.editor.records(),
            &self.config.catalog,
            self.config.size_metric,
        )
    }

    #[must_use]
    pub fn self_checks(&self) -> Vec<SelfCheck> {
        run_self_checks(self.editor.records(), &self.config, &self.view, &self.layout)
    }

    #[must_use]
    pub fn summary(&self) -> ChartSummary {
        ChartSummary::new(self.editor.records(), self.layout.visible_count)
    }

    fn after_records_changed(&mut self) -> ChartResult<()> {
        self.relayout()?;
        let records_len = self.editor.len();
        debug!(records_len, "records changed");
        self.emit_plugin_event(PluginEvent::RecordsChanged { records_len });
        Ok(())
    }
}
