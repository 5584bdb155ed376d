use crate::core::{SampleMatrix, SeriesCatalog};
use crate::interaction::{InteractionState, PointerThrottle};
use crate::render::PresentationFrame;

use super::{HighlightMode, PresentationConfig, PresentationResolver};

/// Internal engine core state used by the public facade (`HighlightEngine`).
pub(super) struct EngineCore {
    pub(super) catalog: SeriesCatalog,
    pub(super) matrix: SampleMatrix,
    pub(super) interaction: InteractionState,
    pub(super) throttle: PointerThrottle,
    pub(super) mode: HighlightMode,
    pub(super) presentation: PresentationConfig,
    pub(super) frame: PresentationFrame,
}

impl EngineCore {
    pub(super) fn resolver(&self) -> PresentationResolver<'_> {
        PresentationResolver::new(&self.catalog, &self.matrix, self.presentation)
    }

    /// Re-resolves the cached frame from current state.
    pub(super) fn resolve_frame(&mut self) {
        self.frame = self.resolver().resolve_state(&self.interaction, self.mode);
    }
}
