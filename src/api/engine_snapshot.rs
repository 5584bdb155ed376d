use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, VisibilityState};
use crate::render::Renderer;

use super::{HighlightEngine, HighlightMode};

/// Serializable interaction snapshot used by regression tests and debugging
/// tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub mode: HighlightMode,
    pub visibility: VisibilityState,
    pub hover: HoverState,
    pub sample_count: usize,
    pub series_count: usize,
}

impl<R: Renderer> HighlightEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            mode: self.core.mode,
            visibility: self.core.interaction.visibility().clone(),
            hover: self.core.interaction.hover().clone(),
            sample_count: self.core.matrix.len(),
            series_count: self.core.catalog.len(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Serializes the sample matrix for export.
    pub fn matrix_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.core.matrix)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize matrix: {e}")))
    }
}
