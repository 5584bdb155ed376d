use crate::core::{SampleMatrix, SeriesCatalog};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::{PresentationFrame, Renderer};

use super::{HighlightMode, PresentationConfig, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `HighlightEngine` owns the catalog, the frozen sample matrix and the
/// interaction state, turns normalized pointer/click events into state
/// transitions, and hands every resolved frame to the renderer.
pub struct HighlightEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> HighlightEngine<R> {
    #[must_use]
    pub fn catalog(&self) -> &SeriesCatalog {
        &self.core.catalog
    }

    #[must_use]
    pub fn matrix(&self) -> &SampleMatrix {
        &self.core.matrix
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.core.interaction
    }

    #[must_use]
    pub fn mode(&self) -> HighlightMode {
        self.core.mode
    }

    #[must_use]
    pub fn presentation_config(&self) -> PresentationConfig {
        self.core.presentation
    }

    /// Frame resolved after the last accepted state change.
    #[must_use]
    pub fn frame(&self) -> &PresentationFrame {
        &self.core.frame
    }

    /// Re-resolves and renders the current state.
    pub fn render(&mut self) -> ChartResult<()> {
        self.core.resolve_frame();
        self.renderer.render(&self.core.frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
