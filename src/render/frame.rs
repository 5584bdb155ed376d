use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{SeriesCode, SeriesGroup};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Visual attributes of one series line for the current interaction state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRenderAttributes {
    pub code: SeriesCode,
    pub group: SeriesGroup,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
    pub visible: bool,
    pub opacity: f64,
    pub stroke_width: f64,
    pub dashed: bool,
    pub show_active_point: bool,
    /// Paint order; higher is drawn later (on top).
    pub z_order: usize,
}

impl SeriesRenderAttributes {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` opacity must be finite and in [0, 1]",
                self.code
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "series `{}` stroke width must be finite and > 0",
                self.code
            )));
        }
        self.color.validate()
    }
}

/// One series value listed in a multi-series tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub code: SeriesCode,
    pub value: u32,
}

/// Tooltip content handed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipPayload {
    Single {
        code: SeriesCode,
        time: f64,
        label: String,
        value: u32,
    },
    Multi {
        time: f64,
        label: String,
        entries: SmallVec<[TooltipEntry; 12]>,
    },
}

impl TooltipPayload {
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Single { time, .. } | Self::Multi { time, .. } => *time,
        }
    }
}

/// Marker for the active sample on one series, materialized when the
/// backend draws active points in a separate overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePointMarker {
    pub code: SeriesCode,
    pub index: usize,
    pub time: f64,
    pub value: u32,
    pub color: Color,
}

/// Backend-agnostic description of one presentation pass.
///
/// `series` is sorted by `z_order`, so backends can paint it front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationFrame {
    pub series: Vec<SeriesRenderAttributes>,
    pub tooltip: Option<TooltipPayload>,
    pub active_points: Vec<ActivePointMarker>,
}

impl PresentationFrame {
    #[must_use]
    pub fn attributes(&self, code: &str) -> Option<&SeriesRenderAttributes> {
        self.series.iter().find(|attrs| attrs.code.as_str() == code)
    }

    /// Series painted last.
    #[must_use]
    pub fn topmost(&self) -> Option<&SeriesRenderAttributes> {
        self.series.last()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for attrs in &self.series {
            attrs.validate()?;
        }
        for pair in self.series.windows(2) {
            if pair[0].z_order >= pair[1].z_order {
                return Err(ChartError::InvalidData(
                    "series attributes must be sorted by strictly increasing z_order".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
