use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{SeriesCode, SeriesGroup};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::HighlightEngine;

/// Normalized input event dispatched by the rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    PointerMove { index: usize, at: Instant },
    PointerLeave,
    SeriesEnter(SeriesCode),
    SeriesLeave,
    SeriesClick(SeriesCode),
    GroupClick(SeriesGroup),
    ModeChange { single_series: bool },
}

/// What the engine did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// State changed and a new frame went to the renderer.
    Rendered,
    /// Pointer move arrived inside the throttle interval and was discarded.
    Dropped,
    /// Event matched current state; nothing was rendered.
    Unchanged,
}

impl<R: Renderer> HighlightEngine<R> {
    /// Runs one event to completion.
    pub fn handle_event(&mut self, event: ChartEvent) -> ChartResult<EventOutcome> {
        match event {
            ChartEvent::PointerMove { index, at } => self.pointer_move(index, at),
            ChartEvent::PointerLeave => self.pointer_leave(),
            ChartEvent::SeriesEnter(code) => self.series_enter(code.as_str()),
            ChartEvent::SeriesLeave => self.series_leave(),
            ChartEvent::SeriesClick(code) => {
                self.toggle_series(code.as_str())?;
                Ok(EventOutcome::Rendered)
            }
            ChartEvent::GroupClick(group) => {
                self.toggle_group(group)?;
                Ok(EventOutcome::Rendered)
            }
            ChartEvent::ModeChange { single_series } => self.set_single_series_mode(single_series),
        }
    }
}
