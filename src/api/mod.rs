mod chart_config;
mod data_controller;
mod diagnostics;
mod engine;
mod interaction_controller;
mod json_contract;
mod layout;
mod plugin_dispatch;
mod record_editor;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;
mod summary;
mod tooltip;
mod validation;
mod view_controller;
mod view_state;

pub use crate::extensions::PluginEvent;
pub use chart_config::{ChartConfig, SizeMultiplierRange};
pub use diagnostics::{SelfCheck, run_self_checks};
pub use engine::BubbleChart;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1, records_from_json_str,
    records_to_json_pretty,
};
pub use layout::{ChartLayout, PlacedPoint, compute_layout};
pub use record_editor::{
    NEW_RECORD_AMOUNT, NEW_RECORD_NAME, RecordEditor, RecordField, default_record,
};
pub use render_frame_builder::build_render_frame;
pub use render_style::RenderStyle;
pub use snapshot_controller::ChartSnapshot;
pub use summary::{ChartSummary, effort_legend, lifecycle_legend};
pub use tooltip::{TOOLTIP_OFFSET_X_PX, TOOLTIP_OFFSET_Y_PX, Tooltip, format_currency};
pub use validation::validate_records;
pub use view_state::ViewState;
