use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{SampleMatrix, SeriesCatalog};
use crate::interaction::{HoverState, InteractionState, VisibilityState};
use crate::render::{
    ActivePointMarker, PresentationFrame, SeriesRenderAttributes, TooltipEntry, TooltipPayload,
};

/// Presentation semantics selected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// All visible series drawn uniformly with a multi-series tooltip.
    #[default]
    Classic,
    /// The hovered series is isolated visually and in the tooltip.
    SingleSeries,
}

impl HighlightMode {
    #[must_use]
    pub fn from_single_series(single_series: bool) -> Self {
        if single_series {
            Self::SingleSeries
        } else {
            Self::Classic
        }
    }

    #[must_use]
    pub fn is_single_series(self) -> bool {
        matches!(self, Self::SingleSeries)
    }
}

/// How the backend is expected to draw active-sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivePointStrategy {
    /// Backend draws the point as part of each line using `show_active_point`.
    #[default]
    Inline,
    /// Resolver also emits `ActivePointMarker`s for a separate top layer.
    Overlay,
}

/// Presentation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Opacity of non-hovered series in single-series mode; strictly inside (0, 1).
    pub faded_opacity: f64,
    pub base_width: f64,
    pub hovered_width: f64,
    pub active_point_strategy: ActivePointStrategy,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            faded_opacity: 0.08,
            base_width: 2.0,
            hovered_width: 3.5,
            active_point_strategy: ActivePointStrategy::Inline,
        }
    }
}

impl PresentationConfig {
    /// Lighter fade with overlay-drawn active points.
    #[must_use]
    pub fn soft_fade() -> Self {
        Self {
            faded_opacity: 0.15,
            active_point_strategy: ActivePointStrategy::Overlay,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_faded_opacity(mut self, faded_opacity: f64) -> Self {
        self.faded_opacity = faded_opacity;
        self
    }

    #[must_use]
    pub fn with_widths(mut self, base_width: f64, hovered_width: f64) -> Self {
        self.base_width = base_width;
        self.hovered_width = hovered_width;
        self
    }

    #[must_use]
    pub fn with_active_point_strategy(mut self, strategy: ActivePointStrategy) -> Self {
        self.active_point_strategy = strategy;
        self
    }
}

/// Pure mapping from catalog, matrix and interaction state to render
/// attributes and tooltip content. Never mutates anything.
#[derive(Debug, Clone, Copy)]
pub struct PresentationResolver<'a> {
    catalog: &'a SeriesCatalog,
    matrix: &'a SampleMatrix,
    config: PresentationConfig,
}

impl<'a> PresentationResolver<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a SeriesCatalog,
        matrix: &'a SampleMatrix,
        config: PresentationConfig,
    ) -> Self {
        Self {
            catalog,
            matrix,
            config,
        }
    }

    #[must_use]
    pub fn resolve_state(&self, state: &InteractionState, mode: HighlightMode) -> PresentationFrame {
        self.resolve(state.visibility(), state.hover(), mode)
    }

    #[must_use]
    pub fn resolve(
        &self,
        visibility: &VisibilityState,
        hover: &HoverState,
        mode: HighlightMode,
    ) -> PresentationFrame {
        let series = self.series_attributes(visibility, hover, mode);
        let active_points = match (self.config.active_point_strategy, hover.active_index()) {
            (ActivePointStrategy::Overlay, Some(index)) => self.active_points(&series, index),
            _ => Vec::new(),
        };
        PresentationFrame {
            tooltip: self.tooltip(visibility, hover, mode),
            series,
            active_points,
        }
    }

    /// Per-series attributes sorted by paint order, hovered series last.
    #[must_use]
    pub fn series_attributes(
        &self,
        visibility: &VisibilityState,
        hover: &HoverState,
        mode: HighlightMode,
    ) -> Vec<SeriesRenderAttributes> {
        let has_hover = hover.hovered().is_some();
        let has_active = hover
            .active_index()
            .is_some_and(|index| index < self.matrix.len());

        let mut attributes: Vec<SeriesRenderAttributes> = self
            .catalog
            .iter()
            .map(|series| {
                let visible = visibility.is_visible(series);
                let hovered = hover.is_hovered(series.code().as_str());
                let opacity = if !visible {
                    0.0
                } else if !mode.is_single_series() || !has_hover || hovered {
                    1.0
                } else {
                    self.config.faded_opacity
                };
                let show_active_point = has_active
                    && visible
                    && match mode {
                        HighlightMode::SingleSeries => hovered,
                        HighlightMode::Classic => true,
                    };
                let stroke_style = series.stroke_style();

                SeriesRenderAttributes {
                    code: series.code().clone(),
                    group: series.group(),
                    color: series.color(),
                    stroke_style,
                    visible,
                    opacity,
                    stroke_width: if hovered {
                        self.config.hovered_width
                    } else {
                        self.config.base_width
                    },
                    dashed: stroke_style.is_dashed(),
                    show_active_point,
                    z_order: 0,
                }
            })
            .collect();

        // Stable sort keeps catalog order among non-hovered series.
        attributes.sort_by_key(|attrs| hover.is_hovered(attrs.code.as_str()));
        for (z_order, attrs) in attributes.iter_mut().enumerate() {
            attrs.z_order = z_order;
        }
        attributes
    }

    #[must_use]
    pub fn tooltip(
        &self,
        visibility: &VisibilityState,
        hover: &HoverState,
        mode: HighlightMode,
    ) -> Option<TooltipPayload> {
        let index = hover.active_index()?;
        let sample = self.matrix.get(index)?;

        match mode {
            HighlightMode::SingleSeries => {
                let code = hover.hovered()?;
                Some(TooltipPayload::Single {
                    code: code.clone(),
                    time: sample.time(),
                    label: sample.label(),
                    value: sample.value(code.as_str()).unwrap_or(0),
                })
            }
            HighlightMode::Classic => {
                let entries: SmallVec<[TooltipEntry; 12]> = self
                    .catalog
                    .iter()
                    .filter(|series| visibility.is_visible(series))
                    .map(|series| TooltipEntry {
                        code: series.code().clone(),
                        value: sample.value(series.code().as_str()).unwrap_or(0),
                    })
                    .collect();
                if entries.is_empty() {
                    return None;
                }
                Some(TooltipPayload::Multi {
                    time: sample.time(),
                    label: sample.label(),
                    entries,
                })
            }
        }
    }

    fn active_points(
        &self,
        attributes: &[SeriesRenderAttributes],
        index: usize,
    ) -> Vec<ActivePointMarker> {
        let Some(sample) = self.matrix.get(index) else {
            return Vec::new();
        };
        attributes
            .iter()
            .filter(|attrs| attrs.show_active_point)
            .map(|attrs| ActivePointMarker {
                code: attrs.code.clone(),
                index,
                time: sample.time(),
                value: sample.value(attrs.code.as_str()).unwrap_or(0),
                color: attrs.color,
            })
            .collect()
    }
}
