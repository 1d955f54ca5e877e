pub mod axis;
pub mod catalog;
pub mod encoding;
pub mod filter;
pub mod jitter;
pub mod point_scale;
pub mod record;
pub mod seed;
pub mod types;

pub use axis::{
    AxisWidthPolicy, CapabilityAxis, CollapseState, GroupRange, ValueDriverAxis, VisibleTick,
    visible_ticks,
};
pub use catalog::{CapabilityCatalog, CapabilityGroup};
pub use encoding::{
    AreaScale, EffortVisibility, EncodingContext, MetricExtent, OpacityPolicy, SizeMetric,
    VisualEncoding, benefit_bucket_opacity, effort_glyph, encode_record, encode_records,
    glyph_font_size, lifecycle_opacity, radius_from_area, risk_color,
};
pub use filter::{CategoryFilter, FilterState, filter_records};
pub use jitter::{JitterConfig, JitterOffset, golden_angle, jitter_offsets, spiral_offset};
pub use point_scale::PointScale;
pub use record::{Effort, Lifecycle, Record, Risk, ValueDriver, coerce_number};
pub use types::{Margins, PlotArea, Viewport};
