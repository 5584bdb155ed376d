//! series-highlight: interactive series highlighting for multi-series time charts.
//!
//! The crate owns the parts of such a chart that carry state and invariants:
//! a fixed series catalog, a bounded random-walk generator producing the
//! sample matrix, the visibility/hover state machine, and a pure resolver that
//! turns that state into per-series render attributes and tooltip content.
//! Drawing is left to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{HighlightEngine, HighlightEngineConfig};
pub use error::{ChartError, ChartResult};
