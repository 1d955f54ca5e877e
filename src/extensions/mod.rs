//! Host-facing hooks that sit outside the layout path.
//!
//! Plugins observe engine events; the clipboard sink is the only outbound
//! side effect the engine performs.

pub mod clipboard;
pub mod plugins;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard};
pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
