use tracing::debug;

use crate::core::{RngUnitSource, SeriesCatalog, UnitSource, generate};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, PointerThrottle};
use crate::render::{PresentationFrame, Renderer};

use super::validation::validate_presentation_config;
use super::{HighlightEngine, HighlightEngineConfig, engine_core::EngineCore};

impl<R: Renderer> HighlightEngine<R> {
    /// Creates an engine whose sample matrix is drawn from the thread-local RNG.
    pub fn new(renderer: R, config: HighlightEngineConfig) -> ChartResult<Self> {
        Self::with_source(renderer, config, &mut RngUnitSource::thread())
    }

    /// Creates an engine drawing the sample matrix from `source`.
    ///
    /// Generation runs once, before the engine exists, so no reader can
    /// observe a partially generated matrix.
    pub fn with_source<S: UnitSource>(
        renderer: R,
        config: HighlightEngineConfig,
        source: &mut S,
    ) -> ChartResult<Self> {
        let presentation = validate_presentation_config(config.presentation)?;
        let catalog = SeriesCatalog::build(&config.catalog)?;
        let matrix = generate(&catalog, &config.generator, source)?;
        let interaction = InteractionState::new(&catalog, matrix.len());

        debug!(
            series = catalog.len(),
            samples = matrix.len(),
            single_series_mode = config.single_series_mode,
            "highlight engine initialized"
        );

        let mut core = EngineCore {
            catalog,
            matrix,
            interaction,
            throttle: PointerThrottle::new(config.pointer_throttle()),
            mode: config.initial_mode(),
            presentation,
            frame: PresentationFrame::default(),
        };
        core.resolve_frame();

        Ok(Self { renderer, core })
    }
}
