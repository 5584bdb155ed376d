use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{CatalogConfig, GeneratorConfig};
use crate::error::{ChartError, ChartResult};

use super::{HighlightMode, PresentationConfig};

/// Public engine bootstrap configuration.
///
/// This type is serializable so hosts can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightEngineConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default = "default_pointer_throttle_ms")]
    pub pointer_throttle_ms: u64,
    #[serde(default)]
    pub single_series_mode: bool,
}

impl Default for HighlightEngineConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            generator: GeneratorConfig::default(),
            presentation: PresentationConfig::default(),
            pointer_throttle_ms: default_pointer_throttle_ms(),
            single_series_mode: false,
        }
    }
}

impl HighlightEngineConfig {
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    #[must_use]
    pub fn with_presentation(mut self, presentation: PresentationConfig) -> Self {
        self.presentation = presentation;
        self
    }

    /// Sets the minimum spacing between accepted pointer moves.
    #[must_use]
    pub fn with_pointer_throttle_ms(mut self, pointer_throttle_ms: u64) -> Self {
        self.pointer_throttle_ms = pointer_throttle_ms;
        self
    }

    /// Sets the initial presentation mode.
    #[must_use]
    pub fn with_single_series_mode(mut self, single_series_mode: bool) -> Self {
        self.single_series_mode = single_series_mode;
        self
    }

    #[must_use]
    pub fn pointer_throttle(&self) -> Duration {
        Duration::from_millis(self.pointer_throttle_ms)
    }

    #[must_use]
    pub fn initial_mode(&self) -> HighlightMode {
        HighlightMode::from_single_series(self.single_series_mode)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize engine config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))
    }
}

fn default_pointer_throttle_ms() -> u64 {
    16
}
