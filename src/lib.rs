//! bubble-chart-rs: headless layout engine for capability/value-driver
//! bubble charts.
//!
//! Records are placed on a categorical capability axis (with collapsible
//! capability groups) against a fixed value-driver axis. Bubble area follows
//! a size metric, fill follows risk, opacity follows lifecycle or benefit
//! bucket, and an effort glyph is overlaid. Drawing is delegated to a
//! [`render::Renderer`] through backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BubbleChart, ChartConfig, ViewState};
pub use error::{ChartError, ChartResult};
